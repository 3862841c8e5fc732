use std::fmt::Write as _;

use chrono::DateTime;
use tracing::warn;

use crate::core::{Axis, Ticks, sorted_pair, time_ticks};
use crate::render::{Color, Renderer};

use super::{AxisFormat, ChartPod};

const DEFAULT_X_TICK_COUNT: u32 = 5;
const DEFAULT_Y_TICK_COUNT: u32 = 4;

/// Shortest decimal text for a tick value; `-0` prints as `0`.
#[must_use]
pub fn format_numeric(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}

/// `strftime` rendering of a millisecond timestamp in UTC.
#[must_use]
pub fn format_time(timestamp_ms: f64, pattern: &str) -> Option<String> {
    if !timestamp_ms.is_finite() {
        return None;
    }
    let datetime = DateTime::from_timestamp_millis(timestamp_ms.round() as i64)?;
    let mut out = String::new();
    write!(out, "{}", datetime.format(pattern)).ok()?;
    Some(out)
}

impl<R: Renderer> ChartPod<R> {
    /// Tick values for the x axis inside the current domain.
    pub(super) fn x_ticks(&self) -> Ticks {
        let scales = self.scales();
        let x_scale = scales.x_scale();
        let (lo, hi) = sorted_pair(x_scale.domain());

        if self.options.render_ticks_from_timestamps {
            if let Some(first) = self.series.first() {
                return first
                    .datapoints
                    .iter()
                    .map(|point| point.timestamp)
                    .filter(|timestamp| (lo..=hi).contains(timestamp))
                    .collect();
            }
        }

        let axis_options = self.options.axis.get(Axis::X);
        match (axis_options.format, self.options.time_interval.count) {
            (AxisFormat::Time, Some(count)) => {
                time_ticks((lo, hi), self.options.time_interval.time_format, count)
            }
            (_, Some(count)) => x_scale.ticks(count as usize),
            (_, None) => {
                x_scale.ticks(axis_options.ticks_count.unwrap_or(DEFAULT_X_TICK_COUNT) as usize)
            }
        }
    }

    pub(super) fn y_ticks(&self, axis: Axis) -> Ticks {
        let count = self
            .options
            .axis
            .get(axis)
            .ticks_count
            .unwrap_or(DEFAULT_Y_TICK_COUNT);
        self.scales().scale(axis).ticks(count as usize)
    }

    /// Label text for every tick of `axis`, in tick order.
    pub(super) fn tick_labels(&self, axis: Axis, ticks: &[f64]) -> Vec<String> {
        let format = self.options.axis.get(axis).format;
        let formatter = self.formatters.get(axis).value.as_ref();
        let needs_formatter = matches!(format, AxisFormat::String | AxisFormat::Custom);
        if needs_formatter && formatter.is_none() {
            warn!(
                ?axis,
                ?format,
                "value formatter is not defined, falling back to numeric labels"
            );
        }

        ticks
            .iter()
            .enumerate()
            .map(|(index, value)| match (format, formatter) {
                (AxisFormat::Time, _) => format_time(*value, &self.options.tick_format.x_axis)
                    .unwrap_or_else(|| format_numeric(*value)),
                (AxisFormat::String | AxisFormat::Custom, Some(formatter)) => {
                    formatter(*value, index)
                }
                (AxisFormat::Numeric, Some(formatter)) if axis.is_vertical() => {
                    formatter(*value, index)
                }
                _ => format_numeric(*value),
            })
            .collect()
    }

    /// Label colour from the axis colour formatter, or the style default.
    pub(super) fn tick_label_color(&self, axis: Axis, value: f64) -> Color {
        let Some(formatter) = self.formatters.get(axis).color.as_ref() else {
            return self.style.axis_label_color;
        };
        let css = formatter(value);
        match Color::from_css(&css) {
            Ok(color) => color,
            Err(err) => {
                warn!(?axis, value, error = %err, "ignoring tick colour from formatter");
                self.style.axis_label_color
            }
        }
    }
}
