use crate::core::Axis;
use crate::interaction::{PartialTransform, ZoomTransform};

use super::{ChartOptions, RangeSelection};

/// Where a view range came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOrigin {
    /// Copied from the axis `range` option.
    Pinned,
    /// Produced by a brush or pan gesture.
    Selected,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRange {
    pub range: (f64, f64),
    pub origin: RangeOrigin,
}

/// Selected value ranges per axis and the pan transform.
///
/// No validation happens here; callers own ordering and finiteness.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewState {
    x: Option<ViewRange>,
    y: Option<ViewRange>,
    y1: Option<ViewRange>,
    transform: ZoomTransform,
}

impl ViewState {
    /// Initial state: pinned axis ranges and the identity transform.
    #[must_use]
    pub fn from_options(options: &ChartOptions) -> Self {
        let pinned = |axis: Axis| {
            options.axis.get(axis).range.map(|range| ViewRange {
                range,
                origin: RangeOrigin::Pinned,
            })
        };
        Self {
            x: pinned(Axis::X),
            y: pinned(Axis::Y),
            y1: pinned(Axis::Y1),
            transform: ZoomTransform::IDENTITY,
        }
    }

    fn slot(&self, axis: Axis) -> &Option<ViewRange> {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Y1 => &self.y1,
        }
    }

    fn slot_mut(&mut self, axis: Axis) -> &mut Option<ViewRange> {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Y1 => &mut self.y1,
        }
    }

    #[must_use]
    pub fn range(&self, axis: Axis) -> Option<(f64, f64)> {
        self.slot(axis).map(|slot| slot.range)
    }

    #[must_use]
    pub fn range_origin(&self, axis: Axis) -> Option<RangeOrigin> {
        self.slot(axis).map(|slot| slot.origin)
    }

    /// Stores a gesture-selected range.
    pub fn set_range(&mut self, axis: Axis, range: (f64, f64)) {
        *self.slot_mut(axis) = Some(ViewRange {
            range,
            origin: RangeOrigin::Selected,
        });
    }

    pub fn clear_range(&mut self, axis: Axis) {
        *self.slot_mut(axis) = None;
    }

    #[must_use]
    pub fn x_range(&self) -> Option<(f64, f64)> {
        self.range(Axis::X)
    }

    pub fn set_x_range(&mut self, range: (f64, f64)) {
        self.set_range(Axis::X, range);
    }

    #[must_use]
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.range(Axis::Y)
    }

    pub fn set_y_range(&mut self, range: (f64, f64)) {
        self.set_range(Axis::Y, range);
    }

    #[must_use]
    pub fn y1_range(&self) -> Option<(f64, f64)> {
        self.range(Axis::Y1)
    }

    pub fn set_y1_range(&mut self, range: (f64, f64)) {
        self.set_range(Axis::Y1, range);
    }

    #[must_use]
    pub fn transform(&self) -> ZoomTransform {
        self.transform
    }

    /// Replaces each transform component that `partial` carries.
    pub fn set_transform(&mut self, partial: PartialTransform) {
        if let Some(x) = partial.x {
            self.transform.x = x;
        }
        if let Some(y) = partial.y {
            self.transform.y = y;
        }
        if let Some(k) = partial.k {
            self.transform.k = k;
        }
    }

    #[must_use]
    pub fn ranges(&self) -> RangeSelection {
        RangeSelection {
            x: self.x_range(),
            y: self.y_range(),
            y1: self.y1_range(),
        }
    }
}
