use indexmap::IndexSet;

use crate::error::ChartResult;
use crate::render::{
    Color, FrameLayer, LayerKind, RectPrimitive, Renderer, TextHAlign, TextPrimitive,
};

use super::ChartPod;

const CHECKBOX_WIDTH_PX: f64 = 13.0;
const CHECKBOX_HEIGHT_PX: f64 = 15.0;
const CHECKBOX_OFFSET_Y_PX: f64 = 12.0;
const LABEL_OFFSET_X_PX: f64 = 20.0;
const ENTRY_GAP_PX: f64 = 25.0;
/// Average glyph advance as a share of the font size.
const GLYPH_WIDTH_RATIO: f64 = 0.6;

const NO_DATA_MESSAGE: &str = "No data points";
const X_LABEL_OFFSET_PX: f64 = 35.0;
const X_LABEL_NO_LEGEND_SHIFT_PX: f64 = 20.0;
const Y_LABEL_INSET_PX: f64 = 14.0;

/// Part of a legend entry hit by a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendHit {
    Checkbox(usize),
    Label(usize),
}

/// Geometry of one legend entry in plot coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub series_index: usize,
    pub checkbox: RectPrimitive,
    pub label: TextPrimitive,
    pub label_width: f64,
}

impl LegendEntry {
    fn hit(&self, x: f64, y: f64) -> Option<LegendHit> {
        let checkbox = &self.checkbox;
        let in_row = (checkbox.y..=checkbox.y + checkbox.height).contains(&y);
        if !in_row {
            return None;
        }
        if (checkbox.x..=checkbox.x + checkbox.width).contains(&x) {
            return Some(LegendHit::Checkbox(self.series_index));
        }
        if (self.label.x..=self.label.x + self.label_width).contains(&x) {
            return Some(LegendHit::Label(self.series_index));
        }
        None
    }
}

impl<R: Renderer> ChartPod<R> {
    /// Legend entries in row order, bound series excluded. Empty while no
    /// series carries datapoints.
    pub fn legend_entries(&self) -> ChartResult<Vec<LegendEntry>> {
        if !self.options.render_legend || self.is_series_unavailable() {
            return Ok(Vec::new());
        }
        let bound_targets = self.bound_targets();
        let row_y = self.layout().legend_row_y();
        let font_size = self.style.legend_font_size_px;
        let mut entries = Vec::with_capacity(self.series.len());
        let mut row_x = 0.0;

        for (index, serie) in self.series.iter().enumerate() {
            if bound_targets.contains(serie.target.as_str()) {
                continue;
            }
            let color = self.series_color(index)?;
            let fill = if serie.visible { color } else { Color::WHITE };
            let checkbox = RectPrimitive::new(
                row_x,
                row_y - CHECKBOX_OFFSET_Y_PX,
                CHECKBOX_WIDTH_PX,
                CHECKBOX_HEIGHT_PX,
                fill,
            )
            .with_stroke(self.style.legend_checkbox_border_color);
            let label_width = serie.target.chars().count() as f64 * font_size * GLYPH_WIDTH_RATIO;
            let label = TextPrimitive::new(
                serie.target.clone(),
                row_x + LABEL_OFFSET_X_PX,
                row_y,
                font_size,
                color,
                TextHAlign::Left,
            );
            entries.push(LegendEntry {
                series_index: index,
                checkbox,
                label,
                label_width,
            });
            row_x += LABEL_OFFSET_X_PX + label_width + ENTRY_GAP_PX;
        }
        Ok(entries)
    }

    /// Legend checkbox or label under a plot-space position.
    pub fn legend_hit(&self, x: f64, y: f64) -> ChartResult<Option<LegendHit>> {
        Ok(self
            .legend_entries()?
            .iter()
            .find_map(|entry| entry.hit(x, y)))
    }

    pub(super) fn build_legend_layer(&self) -> ChartResult<FrameLayer> {
        let mut layer = FrameLayer::new(LayerKind::Legend);
        for entry in self.legend_entries()? {
            layer.rects.push(entry.checkbox);
            layer.texts.push(entry.label);
        }
        Ok(layer)
    }

    pub(super) fn build_labels_layer(&self) -> FrameLayer {
        let mut layer = FrameLayer::new(LayerKind::Labels);
        let layout = self.layout();
        let plot = layout.plot;
        let margin = layout.margin;
        let font_size = self.style.axis_title_font_size_px;
        let color = self.style.axis_label_color;

        if let Some(text) = self.options.label_format.y_axis.as_deref() {
            layer.texts.push(
                TextPrimitive::new(
                    text,
                    -margin.left + Y_LABEL_INSET_PX,
                    plot.height / 2.0,
                    font_size,
                    color,
                    TextHAlign::Center,
                )
                .rotated(-90.0),
            );
        }
        if let Some(text) = self.options.label_format.x_axis.as_deref() {
            let mut y = plot.height + margin.top + margin.bottom - X_LABEL_OFFSET_PX;
            if self.series.is_empty() {
                y += X_LABEL_NO_LEGEND_SHIFT_PX;
            }
            layer.texts.push(TextPrimitive::new(
                text,
                plot.width / 2.0,
                y,
                font_size,
                color,
                TextHAlign::Center,
            ));
        }
        if self.is_series_unavailable() {
            layer.texts.push(TextPrimitive::new(
                NO_DATA_MESSAGE,
                plot.width / 2.0,
                plot.height / 2.0,
                font_size,
                color,
                TextHAlign::Center,
            ));
        }
        layer.texts.retain(|text| !text.text.is_empty());
        layer
    }

    fn bound_targets(&self) -> IndexSet<String> {
        let Some(bounds) = self.options.bounds.as_ref() else {
            return IndexSet::new();
        };
        self.series
            .iter()
            .flat_map(|serie| bounds.bound_targets(&serie.target))
            .collect()
    }
}
