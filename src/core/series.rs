use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use super::types::Axis;

pub const MILLISECONDS_IN_MINUTE: f64 = 60.0 * 1000.0;

/// Domain used on every axis when there is nothing to plot.
pub const DEFAULT_AXIS_RANGE: (f64, f64) = (0.0, 1.0);

/// One `(value, timestamp)` sample. Serialized as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Datapoint {
    pub value: f64,
    /// Unix time in milliseconds.
    pub timestamp: f64,
}

impl Datapoint {
    #[must_use]
    pub const fn new(value: f64, timestamp: f64) -> Self {
        Self { value, timestamp }
    }
}

impl From<(f64, f64)> for Datapoint {
    fn from((value, timestamp): (f64, f64)) -> Self {
        Self { value, timestamp }
    }
}

impl From<Datapoint> for (f64, f64) {
    fn from(point: Datapoint) -> Self {
        (point.value, point.timestamp)
    }
}

/// Which y-axis a series is read against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YAxisOrientation {
    #[default]
    Left,
    Right,
    Both,
}

impl YAxisOrientation {
    /// Whether values of a series with this orientation feed the given axis.
    #[must_use]
    pub const fn feeds(self, axis: Axis) -> bool {
        match (self, axis) {
            (_, Axis::X) | (Self::Both, _) => true,
            (Self::Left, Axis::Y) | (Self::Right, Axis::Y1) => true,
            (Self::Left, Axis::Y1) | (Self::Right, Axis::Y) => false,
        }
    }
}

fn default_visible() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSerie {
    /// Unique label of the series.
    pub target: String,
    #[serde(default)]
    pub datapoints: Vec<Datapoint>,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub y_orientation: Option<YAxisOrientation>,
}

impl TimeSerie {
    #[must_use]
    pub fn new(target: impl Into<String>, datapoints: Vec<Datapoint>) -> Self {
        Self {
            target: target.into(),
            datapoints,
            alias: None,
            visible: true,
            color: None,
            y_orientation: None,
        }
    }

    /// Builds a series from `(value, timestamp)` pairs.
    #[must_use]
    pub fn from_pairs(target: impl Into<String>, pairs: &[(f64, f64)]) -> Self {
        Self::new(target, pairs.iter().copied().map(Datapoint::from).collect())
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    #[must_use]
    pub fn with_y_orientation(mut self, orientation: YAxisOrientation) -> Self {
        self.y_orientation = Some(orientation);
        self
    }

    #[must_use]
    pub fn y_orientation(&self) -> YAxisOrientation {
        self.y_orientation.unwrap_or_default()
    }

    #[must_use]
    pub fn feeds(&self, axis: Axis) -> bool {
        self.y_orientation().feeds(axis)
    }
}

/// `true` when there is nothing to plot at all.
#[must_use]
pub fn is_series_unavailable(series: &[TimeSerie]) -> bool {
    series.iter().all(|serie| serie.datapoints.is_empty())
}

/// Natural sampling interval in milliseconds.
///
/// Taken from the first two samples of the first series, then from the
/// configured interval count (in minutes), then one minute.
#[must_use]
pub fn time_interval(series: &[TimeSerie], configured_count: Option<u32>) -> f64 {
    if let Some([first, second, ..]) = series.first().map(|serie| serie.datapoints.as_slice()) {
        return second.timestamp - first.timestamp;
    }
    match configured_count {
        Some(count) => f64::from(count) * MILLISECONDS_IN_MINUTE,
        None => MILLISECONDS_IN_MINUTE,
    }
}

/// Min/max over the finite samples picked by `pick`.
///
/// Returns `None` when no finite sample exists so callers can fall back to a
/// default domain instead of propagating NaN.
pub fn extent<'a, I, F>(series: I, pick: F) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = &'a TimeSerie>,
    F: Fn(&Datapoint) -> f64,
{
    series
        .into_iter()
        .flat_map(|serie| serie.datapoints.iter())
        .map(pick)
        .filter(|value| value.is_finite())
        .map(OrderedFloat)
        .fold(None, |acc, value| match acc {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
        .map(|(min, max)| (min.0, max.0))
}

/// Smallest and largest value of a pinned `[a, b]` range, in that order.
#[must_use]
pub fn sorted_pair(range: (f64, f64)) -> (f64, f64) {
    if range.0 <= range.1 {
        range
    } else {
        (range.1, range.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_when_empty_or_all_series_empty() {
        assert!(is_series_unavailable(&[]));
        assert!(is_series_unavailable(&[
            TimeSerie::new("a", vec![]),
            TimeSerie::new("b", vec![])
        ]));
        assert!(!is_series_unavailable(&[
            TimeSerie::new("a", vec![]),
            TimeSerie::from_pairs("b", &[(1.0, 0.0)])
        ]));
    }

    #[test]
    fn time_interval_prefers_first_series_sampling() {
        let series = [TimeSerie::from_pairs("a", &[(1.0, 1_000.0), (2.0, 31_000.0)])];
        assert_eq!(time_interval(&series, Some(5)), 30_000.0);
    }

    #[test]
    fn time_interval_falls_back_to_configured_count_then_minute() {
        let series = [TimeSerie::from_pairs("a", &[(1.0, 1_000.0)])];
        assert_eq!(time_interval(&series, Some(5)), 300_000.0);
        assert_eq!(time_interval(&series, None), MILLISECONDS_IN_MINUTE);
        assert_eq!(time_interval(&[], None), MILLISECONDS_IN_MINUTE);
    }

    #[test]
    fn extent_skips_non_finite_samples() {
        let series = [
            TimeSerie::from_pairs("a", &[(3.0, 0.0), (f64::NAN, 1.0)]),
            TimeSerie::from_pairs("b", &[(-2.0, 2.0), (9.0, 3.0)]),
        ];
        assert_eq!(extent(&series, |point| point.value), Some((-2.0, 9.0)));
        assert_eq!(extent(&series, |point| point.timestamp), Some((0.0, 3.0)));
        let empty: [TimeSerie; 0] = [];
        assert_eq!(extent(&empty, |point| point.value), None);
    }

    #[test]
    fn orientation_feeds_matching_axes() {
        assert!(YAxisOrientation::Left.feeds(Axis::Y));
        assert!(!YAxisOrientation::Left.feeds(Axis::Y1));
        assert!(YAxisOrientation::Right.feeds(Axis::Y1));
        assert!(YAxisOrientation::Both.feeds(Axis::Y));
        assert!(YAxisOrientation::Both.feeds(Axis::Y1));
    }

    #[test]
    fn datapoints_deserialize_from_pairs() {
        let serie: TimeSerie =
            serde_json::from_str(r#"{"target":"cpu","datapoints":[[1.5,1000],[2.5,2000]]}"#)
                .expect("valid series json");
        assert!(serie.visible);
        assert_eq!(serie.datapoints[1], Datapoint::new(2.5, 2000.0));
    }
}
