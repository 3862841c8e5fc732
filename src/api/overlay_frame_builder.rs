use crate::render::{FrameLayer, LayerKind, LinePrimitive, RectPrimitive, Renderer};

use super::ChartPod;

impl<R: Renderer> ChartPod<R> {
    pub(super) fn build_crosshair_layer(&self) -> FrameLayer {
        let mut layer = FrameLayer::new(LayerKind::Crosshair).clipped();
        let crosshair = self.interaction.crosshair();
        if !crosshair.visible || !self.options.render_crosshair {
            return layer;
        }
        let plot = self.plot_size();
        let color = self.options.crosshair_color();
        let width = self.style.crosshair_line_width;
        let orientation = self.options.crosshair.orientation;

        if orientation.draws_vertical() {
            layer.lines.push(LinePrimitive::new(
                crosshair.x,
                0.0,
                crosshair.x,
                plot.height,
                width,
                color,
            ));
        }
        // A shared crosshair without a value only knows its timestamp.
        if let Some(y) = crosshair.y.filter(|_| orientation.draws_horizontal()) {
            layer
                .lines
                .push(LinePrimitive::new(0.0, y, plot.width, y, width, color));
        }
        layer
    }

    pub(super) fn build_brush_layer(&self) -> FrameLayer {
        let mut layer = FrameLayer::new(LayerKind::Brush).clipped();
        let Some(selection) = self.interaction.brush_selection() else {
            return layer;
        };
        layer.rects.push(
            RectPrimitive::new(
                selection.x,
                selection.y,
                selection.width,
                selection.height,
                self.style.brush_fill_color,
            )
            .with_stroke(self.style.brush_stroke_color),
        );
        layer
    }
}
