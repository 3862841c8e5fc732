use serde::{Deserialize, Serialize};

use crate::core::PlotSize;

/// Shape of the zoom box drawn while brushing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrushOrientation {
    Vertical,
    #[default]
    Horizontal,
    Rectangle,
    Square,
}

impl BrushOrientation {
    #[must_use]
    pub const fn selects_x(self) -> bool {
        matches!(self, Self::Horizontal | Self::Rectangle | Self::Square)
    }

    #[must_use]
    pub const fn selects_y(self) -> bool {
        matches!(self, Self::Vertical | Self::Rectangle | Self::Square)
    }

    /// Pixel selection spanned between the gesture anchor and the pointer.
    ///
    /// Axes the orientation does not select cover the whole plot.
    #[must_use]
    pub fn selection(self, anchor: (f64, f64), pointer: (f64, f64), plot: PlotSize) -> SelectionRect {
        let span = SelectionRect::spanning(anchor, pointer);
        match self {
            Self::Horizontal => SelectionRect {
                y: 0.0,
                height: plot.height,
                ..span
            },
            Self::Vertical => SelectionRect {
                x: 0.0,
                width: plot.width,
                ..span
            },
            Self::Rectangle => span,
            Self::Square => square_selection(anchor, pointer),
        }
    }
}

/// Axis-aligned pixel rectangle on the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SelectionRect {
    #[must_use]
    pub fn spanning(a: (f64, f64), b: (f64, f64)) -> Self {
        Self {
            x: a.0.min(b.0),
            y: a.1.min(b.1),
            width: (a.0 - b.0).abs(),
            height: (a.1 - b.1).abs(),
        }
    }

    #[must_use]
    pub fn x_extent(self) -> (f64, f64) {
        (self.x, self.x + self.width)
    }

    #[must_use]
    pub fn y_extent(self) -> (f64, f64) {
        (self.y, self.y + self.height)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Square selection anchored at the drag start.
///
/// The side is the smaller of the two drag distances. On each axis the square
/// starts at the anchor, unless the pointer moved to the negative side, in
/// which case it ends at the anchor instead.
#[must_use]
pub fn square_selection(anchor: (f64, f64), pointer: (f64, f64)) -> SelectionRect {
    let side = (pointer.0 - anchor.0).abs().min((pointer.1 - anchor.1).abs());
    let x = if pointer.0 >= anchor.0 {
        anchor.0
    } else {
        anchor.0 - side
    };
    let y = if pointer.1 >= anchor.1 {
        anchor.1
    } else {
        anchor.1 - side
    };
    SelectionRect {
        x,
        y,
        width: side,
        height: side,
    }
}
