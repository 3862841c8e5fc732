use serde::{Deserialize, Serialize};

/// Pixel size of the host container the chart is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the plot area for axes, labels and the legend.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Side-wise sum of two margins.
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self {
            top: self.top + other.top,
            right: self.right + other.right,
            bottom: self.bottom + other.bottom,
            left: self.left + other.left,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
            && self.left.is_finite()
    }
}

/// Size of the plot area (container minus margins) in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotSize {
    pub width: f64,
    pub height: f64,
}

impl PlotSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn inside_container(container: Viewport, margin: Margin) -> Self {
        Self {
            width: (f64::from(container.width) - margin.left - margin.right).max(0.0),
            height: (f64::from(container.height) - margin.top - margin.bottom).max(0.0),
        }
    }

    /// Returns `true` when the point lies on the plot, with one pixel of
    /// vertical slack so double-clicks on the axis line still count.
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        (-1.0..=self.height + 1.0).contains(&y) && (0.0..=self.width).contains(&x)
    }
}

/// Value axes known to the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Y1,
}

impl Axis {
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Y1];

    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Y | Self::Y1)
    }
}
