use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{Axis, Margin, TimeFormat};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{
    BrushOrientation, CrosshairOrientation, KeyEvent, PanOrientation, ScrollPanOrientation,
};
use crate::render::Color;

/// How axis tick values are turned into labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisFormat {
    Time,
    #[default]
    Numeric,
    String,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisOptions {
    pub is_active: bool,
    pub ticks_count: Option<u32>,
    pub format: AxisFormat,
    /// Pinned `[min, max]` domain.
    pub range: Option<(f64, f64)>,
    pub invert: bool,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            is_active: true,
            ticks_count: None,
            format: AxisFormat::Numeric,
            range: None,
            invert: false,
        }
    }
}

impl AxisOptions {
    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some((min, max));
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: AxisFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    #[must_use]
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    #[must_use]
    pub fn with_ticks_count(mut self, ticks_count: u32) -> Self {
        self.ticks_count = Some(ticks_count);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxesOptions {
    pub x: AxisOptions,
    pub y: AxisOptions,
    pub y1: AxisOptions,
}

impl Default for AxesOptions {
    fn default() -> Self {
        Self {
            x: AxisOptions::default().with_format(AxisFormat::Time),
            y: AxisOptions::default(),
            y1: AxisOptions::default().with_active(false),
        }
    }
}

impl AxesOptions {
    #[must_use]
    pub fn get(&self, axis: Axis) -> &AxisOptions {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Y1 => &self.y1,
        }
    }

    pub fn get_mut(&mut self, axis: Axis) -> &mut AxisOptions {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Y1 => &mut self.y1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrosshairOptions {
    pub orientation: CrosshairOrientation,
    pub color: String,
}

impl Default for CrosshairOptions {
    fn default() -> Self {
        Self {
            orientation: CrosshairOrientation::Vertical,
            color: "red".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeIntervalOptions {
    pub time_format: TimeFormat,
    /// Units of `time_format` between x ticks.
    pub count: Option<u32>,
}

/// Rotation of x-axis tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickOrientation {
    Vertical,
    #[default]
    Horizontal,
    Diagonal,
}

impl TickOrientation {
    #[must_use]
    pub const fn rotation_deg(self) -> f64 {
        match self {
            Self::Vertical => -90.0,
            Self::Horizontal => 0.0,
            Self::Diagonal => -45.0,
        }
    }

    /// Room the rotated labels need around the plot.
    #[must_use]
    pub const fn extra_margin(self) -> Margin {
        match self {
            Self::Vertical => Margin::new(0.0, 0.0, 80.0, 0.0),
            Self::Horizontal => Margin::new(0.0, 0.0, 0.0, 0.0),
            Self::Diagonal => Margin::new(0.0, 10.0, 50.0, 15.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickFormatOptions {
    /// `strftime` pattern for time x-axis labels.
    pub x_axis: String,
    pub x_tick_orientation: TickOrientation,
}

impl Default for TickFormatOptions {
    fn default() -> Self {
        Self {
            x_axis: "%H:%M".to_owned(),
            x_tick_orientation: TickOrientation::Horizontal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelFormatOptions {
    pub x_axis: Option<String>,
    pub y_axis: Option<String>,
}

/// Name templates of the confidence-bound series; `$__metric_name` is
/// replaced by the bounded series target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundsOptions {
    pub upper: String,
    pub lower: String,
}

pub const METRIC_NAME_PLACEHOLDER: &str = "$__metric_name";

impl BoundsOptions {
    #[must_use]
    pub fn new(upper: impl Into<String>, lower: impl Into<String>) -> Self {
        Self {
            upper: upper.into(),
            lower: lower.into(),
        }
    }

    /// Targets of the two bound series belonging to `target`.
    #[must_use]
    pub fn bound_targets(&self, target: &str) -> [String; 2] {
        [
            self.upper.replace(METRIC_NAME_PLACEHOLDER, target),
            self.lower.replace(METRIC_NAME_PLACEHOLDER, target),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushEventOptions {
    pub is_active: bool,
    pub key_event: KeyEvent,
    pub orientation: BrushOrientation,
}

impl Default for BrushEventOptions {
    fn default() -> Self {
        Self {
            is_active: true,
            key_event: KeyEvent::Main,
            orientation: BrushOrientation::Horizontal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanEventOptions {
    pub is_active: bool,
    pub key_event: KeyEvent,
    pub orientation: PanOrientation,
}

impl Default for PanEventOptions {
    fn default() -> Self {
        Self {
            is_active: true,
            key_event: KeyEvent::Shift,
            orientation: PanOrientation::Horizontal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MouseZoomEvents {
    /// Brush (zoom box) gesture.
    pub zoom: BrushEventOptions,
    pub pan: PanEventOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollZoomOptions {
    pub is_active: bool,
    pub key_event: KeyEvent,
}

impl Default for ScrollZoomOptions {
    fn default() -> Self {
        Self {
            is_active: false,
            key_event: KeyEvent::Main,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollPanOptions {
    pub is_active: bool,
    pub key_event: KeyEvent,
    /// Pixels moved per wheel tick on horizontal stepped pans.
    pub pan_step: f64,
    pub orientation: ScrollPanOrientation,
}

impl Default for ScrollPanOptions {
    fn default() -> Self {
        Self {
            is_active: false,
            key_event: KeyEvent::Shift,
            pan_step: 50.0,
            orientation: ScrollPanOrientation::Vertical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollZoomEvents {
    pub zoom: ScrollZoomOptions,
    pub pan: ScrollPanOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomEventsOptions {
    pub mouse: MouseZoomEvents,
    pub scroll: ScrollZoomEvents,
}

/// Full chart configuration.
///
/// Every field has a default, so partial JSON documents are accepted and
/// deep-merged over `ChartOptions::default()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Replaces the computed margin when set.
    pub margin: Option<Margin>,
    pub axis: AxesOptions,
    pub crosshair: CrosshairOptions,
    pub time_interval: TimeIntervalOptions,
    pub tick_format: TickFormatOptions,
    pub label_format: LabelFormatOptions,
    pub bounds: Option<BoundsOptions>,
    pub zoom_events: ZoomEventsOptions,
    pub render_ticks_from_timestamps: bool,
    pub render_x_axis: bool,
    pub render_y_axis: bool,
    pub render_grid: bool,
    pub render_legend: bool,
    pub render_crosshair: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            margin: None,
            axis: AxesOptions::default(),
            crosshair: CrosshairOptions::default(),
            time_interval: TimeIntervalOptions::default(),
            tick_format: TickFormatOptions::default(),
            label_format: LabelFormatOptions::default(),
            bounds: None,
            zoom_events: ZoomEventsOptions::default(),
            render_ticks_from_timestamps: false,
            render_x_axis: true,
            render_y_axis: true,
            render_grid: true,
            render_legend: true,
            render_crosshair: true,
        }
    }
}

impl ChartOptions {
    /// Parses a partial JSON document and fills the gaps with defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let patch: Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse options json: {e}")))?;
        Self::from_json_value(&patch)
    }

    pub fn from_json_value(patch: &Value) -> ChartResult<Self> {
        Self::default().merged_with(patch)
    }

    /// Deep-merges `patch` over these options and returns the result.
    ///
    /// Objects merge key by key, any other value replaces the current one and
    /// `null` keeps it. `self` is left untouched.
    pub fn merged_with(&self, patch: &Value) -> ChartResult<Self> {
        if !patch.is_object() && !patch.is_null() {
            return Err(ChartError::InvalidConfig(
                "options patch must be a json object".to_owned(),
            ));
        }
        let mut base = serde_json::to_value(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart options: {e}"))
        })?;
        deep_merge(&mut base, patch);
        let merged: Self = serde_json::from_value(base)
            .map_err(|e| ChartError::InvalidConfig(format!("invalid chart options: {e}")))?;
        merged.validate()?;
        Ok(merged)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart options: {e}"))
        })
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = Some(margin);
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: Axis, options: AxisOptions) -> Self {
        *self.axis.get_mut(axis) = options;
        self
    }

    #[must_use]
    pub fn with_brush(mut self, brush: BrushEventOptions) -> Self {
        self.zoom_events.mouse.zoom = brush;
        self
    }

    #[must_use]
    pub fn with_pan(mut self, pan: PanEventOptions) -> Self {
        self.zoom_events.mouse.pan = pan;
        self
    }

    #[must_use]
    pub fn with_scroll_zoom(mut self, zoom: ScrollZoomOptions) -> Self {
        self.zoom_events.scroll.zoom = zoom;
        self
    }

    #[must_use]
    pub fn with_scroll_pan(mut self, pan: ScrollPanOptions) -> Self {
        self.zoom_events.scroll.pan = pan;
        self
    }

    #[must_use]
    pub fn with_crosshair(mut self, crosshair: CrosshairOptions) -> Self {
        self.crosshair = crosshair;
        self
    }

    #[must_use]
    pub fn with_time_interval(mut self, time_format: TimeFormat, count: u32) -> Self {
        self.time_interval = TimeIntervalOptions {
            time_format,
            count: Some(count),
        };
        self
    }

    #[must_use]
    pub fn with_label_format(mut self, label_format: LabelFormatOptions) -> Self {
        self.label_format = label_format;
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: BoundsOptions) -> Self {
        self.bounds = Some(bounds);
        self
    }

    #[must_use]
    pub fn brush(&self) -> &BrushEventOptions {
        &self.zoom_events.mouse.zoom
    }

    #[must_use]
    pub fn pan(&self) -> &PanEventOptions {
        &self.zoom_events.mouse.pan
    }

    #[must_use]
    pub fn scroll_zoom(&self) -> &ScrollZoomOptions {
        &self.zoom_events.scroll.zoom
    }

    #[must_use]
    pub fn scroll_pan(&self) -> &ScrollPanOptions {
        &self.zoom_events.scroll.pan
    }

    /// Brush and drag pan both active on the same modifier key.
    #[must_use]
    pub fn has_brush_pan_key_conflict(&self) -> bool {
        let brush = self.brush();
        let pan = self.pan();
        brush.is_active && pan.is_active && brush.key_event == pan.key_event
    }

    #[must_use]
    pub fn crosshair_color(&self) -> Color {
        Color::from_css(&self.crosshair.color).unwrap_or(Color::RED)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if let Some(margin) = self.margin {
            if !margin.is_finite() {
                return Err(ChartError::InvalidConfig(
                    "margin must be finite".to_owned(),
                ));
            }
        }
        for axis in Axis::ALL {
            let options = self.axis.get(axis);
            if options.ticks_count == Some(0) {
                return Err(ChartError::InvalidConfig(format!(
                    "axis `{axis:?}` ticks_count must be > 0"
                )));
            }
            if let Some((min, max)) = options.range {
                if !min.is_finite() || !max.is_finite() {
                    return Err(ChartError::InvalidConfig(format!(
                        "axis `{axis:?}` range must be finite"
                    )));
                }
            }
        }
        if self.time_interval.count == Some(0) {
            return Err(ChartError::InvalidConfig(
                "time_interval.count must be > 0".to_owned(),
            ));
        }
        let pan_step = self.scroll_pan().pan_step;
        if !pan_step.is_finite() || pan_step <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "scroll pan step must be finite and > 0".to_owned(),
            ));
        }
        Color::from_css(&self.crosshair.color)?;
        validate_strftime(&self.tick_format.x_axis)?;
        Ok(())
    }
}

fn validate_strftime(pattern: &str) -> ChartResult<()> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(ChartError::InvalidConfig(format!(
            "invalid tick format pattern `{pattern}`"
        )));
    }
    Ok(())
}

/// Recursively merges `patch` into `base`.
pub(crate) fn deep_merge(base: &mut Value, patch: &Value) {
    match (base, patch) {
        (_, Value::Null) => {}
        (Value::Object(base_map), Value::Object(patch_map)) => {
            for (key, patch_value) in patch_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge(base_value, patch_value),
                    None => {
                        if !patch_value.is_null() {
                            base_map.insert(key.clone(), patch_value.clone());
                        }
                    }
                }
            }
        }
        (base, patch) => *base = patch.clone(),
    }
}
