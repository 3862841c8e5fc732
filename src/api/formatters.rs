use std::fmt;
use std::sync::Arc;

use crate::core::Axis;

/// Tick label formatter: `(value, tick_index) -> label`.
pub type ValueFormatterFn = Arc<dyn Fn(f64, usize) -> String + Send + Sync + 'static>;
/// Tick label colour formatter: `value -> css colour`.
pub type ColorFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

#[derive(Clone, Default)]
pub struct AxisFormatter {
    pub value: Option<ValueFormatterFn>,
    pub color: Option<ColorFormatterFn>,
}

impl fmt::Debug for AxisFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisFormatter")
            .field("value", &self.value.is_some())
            .field("color", &self.color.is_some())
            .finish()
    }
}

/// Host-provided label formatters, kept apart from the serializable options.
#[derive(Debug, Clone, Default)]
pub struct AxisFormatters {
    x: AxisFormatter,
    y: AxisFormatter,
    y1: AxisFormatter,
}

impl AxisFormatters {
    #[must_use]
    pub fn get(&self, axis: Axis) -> &AxisFormatter {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Y1 => &self.y1,
        }
    }

    fn get_mut(&mut self, axis: Axis) -> &mut AxisFormatter {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Y1 => &mut self.y1,
        }
    }

    #[must_use]
    pub fn with_value_formatter(
        mut self,
        axis: Axis,
        formatter: impl Fn(f64, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        self.get_mut(axis).value = Some(Arc::new(formatter));
        self
    }

    #[must_use]
    pub fn with_color_formatter(
        mut self,
        axis: Axis,
        formatter: impl Fn(f64) -> String + Send + Sync + 'static,
    ) -> Self {
        self.get_mut(axis).color = Some(Arc::new(formatter));
        self
    }
}
