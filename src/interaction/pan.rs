use serde::{Deserialize, Serialize};

use super::ZoomTransform;

/// Axes moved by a pointer-drag pan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanOrientation {
    Vertical,
    #[default]
    Horizontal,
    Both,
}

impl PanOrientation {
    #[must_use]
    pub const fn pans_x(self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }

    #[must_use]
    pub const fn pans_y(self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }
}

/// Axis moved by a wheel-driven stepped pan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollPanOrientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Ranges and transform captured when a drag pan starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanSnapshot {
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub transform: ZoomTransform,
}

/// Largest vertical wheel step, as a share of plot height.
pub const SCROLL_PAN_MAX_STEP_RATIO: f64 = 0.1;
/// Accumulated vertical wheel pan allowed within one gesture, as a share of plot height.
pub const SCROLL_PAN_LIMIT_RATIO: f64 = 0.9;

/// Running total of vertical wheel-pan pixels within one gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollPanTracker {
    accumulated_y: f64,
}

impl ScrollPanTracker {
    #[must_use]
    pub fn accumulated_y(self) -> f64 {
        self.accumulated_y
    }

    /// Wheel delta limited to one tenth of the plot height, sign preserved.
    #[must_use]
    pub fn clamp_step(delta_y: f64, plot_height: f64) -> f64 {
        delta_y.abs().min(plot_height * SCROLL_PAN_MAX_STEP_RATIO) * delta_y.signum()
    }

    /// Adds `step` unless the total would pass the gesture limit.
    ///
    /// Returns `false` (and leaves the total untouched) for a rejected step.
    pub fn try_accumulate(&mut self, step: f64, plot_height: f64) -> bool {
        let next = self.accumulated_y + step;
        if next.abs() > plot_height * SCROLL_PAN_LIMIT_RATIO {
            return false;
        }
        self.accumulated_y = next;
        true
    }

    pub fn reset(&mut self) {
        self.accumulated_y = 0.0;
    }
}

/// Shifts both ends of a range by `delta`.
#[must_use]
pub fn shift_range(range: (f64, f64), delta: f64) -> (f64, f64) {
    (range.0 + delta, range.1 + delta)
}
