use crate::core::{Axis, YAxisOrientation};
use crate::error::ChartResult;
use crate::render::{FrameLayer, LayerKind, PolylinePrimitive, Renderer};

use super::ChartPod;

impl<R: Renderer> ChartPod<R> {
    /// One polyline per visible series, clipped to the plot.
    ///
    /// Right-oriented series are read against y1 while that axis is active.
    pub(super) fn build_metrics_layer(&self) -> ChartResult<FrameLayer> {
        let mut layer = FrameLayer::new(LayerKind::Metrics).clipped();
        let scales = self.scales();
        let x_scale = scales.x_scale();
        let y_scale = scales.y_scale();
        let y1_scale = scales.y1_scale();
        let y1_active = self.y1_active();

        for (index, serie) in self.series.iter().enumerate() {
            if !serie.visible || serie.datapoints.is_empty() {
                continue;
            }
            let value_scale = match serie.y_orientation() {
                YAxisOrientation::Right if y1_active => y1_scale,
                _ => y_scale,
            };
            let points: Vec<(f64, f64)> = serie
                .datapoints
                .iter()
                .filter(|point| point.value.is_finite() && point.timestamp.is_finite())
                .map(|point| (x_scale.map(point.timestamp), value_scale.map(point.value)))
                .collect();
            if points.is_empty() {
                continue;
            }
            layer.polylines.push(PolylinePrimitive::new(
                points,
                self.style.series_line_width,
                self.series_color(index)?,
            ));
        }
        Ok(layer)
    }

    /// Value scale a series is drawn against.
    #[must_use]
    pub fn series_axis(&self, index: usize) -> Option<Axis> {
        let serie = self.series.get(index)?;
        match serie.y_orientation() {
            YAxisOrientation::Right if self.y1_active() => Some(Axis::Y1),
            _ => Some(Axis::Y),
        }
    }
}
