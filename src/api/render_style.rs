use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Visual constants used while materializing frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub axis_line_color: Color,
    pub axis_label_color: Color,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub tick_size_px: f64,
    pub tick_font_size_px: f64,
    pub axis_title_font_size_px: f64,
    pub legend_font_size_px: f64,
    pub series_line_width: f64,
    pub crosshair_line_width: f64,
    pub brush_fill_color: Color,
    pub brush_stroke_color: Color,
    pub legend_checkbox_border_color: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            axis_line_color: Color::BLACK,
            axis_label_color: Color::BLACK,
            grid_line_color: Color::rgb(0.8, 0.8, 0.8).with_alpha(0.5),
            grid_line_width: 1.0,
            tick_size_px: 2.0,
            tick_font_size_px: 10.0,
            axis_title_font_size_px: 14.0,
            legend_font_size_px: 12.0,
            series_line_width: 1.0,
            crosshair_line_width: 1.0,
            brush_fill_color: Color::rgb(0.47, 0.47, 0.47).with_alpha(0.3),
            brush_stroke_color: Color::WHITE,
            legend_checkbox_border_color: Color::GRAY,
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> ChartResult<Self> {
        self.axis_line_color.validate()?;
        self.axis_label_color.validate()?;
        self.grid_line_color.validate()?;
        self.brush_fill_color.validate()?;
        self.brush_stroke_color.validate()?;
        self.legend_checkbox_border_color.validate()?;
        for (name, value) in [
            ("grid_line_width", self.grid_line_width),
            ("tick_size_px", self.tick_size_px),
            ("tick_font_size_px", self.tick_font_size_px),
            ("axis_title_font_size_px", self.axis_title_font_size_px),
            ("legend_font_size_px", self.legend_font_size_px),
            ("series_line_width", self.series_line_width),
            ("crosshair_line_width", self.crosshair_line_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "render style `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }
}
