use crate::core::Axis;
use crate::render::{
    FrameLayer, LayerKind, LinePrimitive, Renderer, TextHAlign, TextPrimitive,
};

use super::ChartPod;

/// Gap between a tick mark and its label.
const TICK_LABEL_PADDING_PX: f64 = 3.0;

impl<R: Renderer> ChartPod<R> {
    pub(super) fn build_grid_layer(&self) -> FrameLayer {
        let mut layer = FrameLayer::new(LayerKind::Grid);
        if !self.options.render_grid {
            return layer;
        }
        let plot = self.plot_size();
        let scales = self.scales();
        let color = self.style.grid_line_color;
        let width = self.style.grid_line_width;

        let x_scale = scales.x_scale();
        for tick in self.x_ticks() {
            let x = x_scale.map(tick);
            if within(x, plot.width) {
                layer
                    .lines
                    .push(LinePrimitive::new(x, 0.0, x, plot.height, width, color));
            }
        }
        let y_scale = scales.y_scale();
        for tick in self.y_ticks(Axis::Y) {
            let y = y_scale.map(tick);
            if within(y, plot.height) {
                layer
                    .lines
                    .push(LinePrimitive::new(0.0, y, plot.width, y, width, color));
            }
        }
        layer
    }

    pub(super) fn build_x_axis_layer(&self) -> FrameLayer {
        let mut layer = FrameLayer::new(LayerKind::XAxis);
        if !self.options.render_x_axis || !self.options.axis.x.is_active {
            return layer;
        }
        let plot = self.plot_size();
        let style = self.style;
        let x_scale = self.scales().x_scale();
        let rotation = self.options.tick_format.x_tick_orientation.rotation_deg();
        let align = if rotation == 0.0 {
            TextHAlign::Center
        } else {
            TextHAlign::Right
        };

        layer.lines.push(LinePrimitive::new(
            0.0,
            plot.height,
            plot.width,
            plot.height,
            1.0,
            style.axis_line_color,
        ));
        let ticks = self.x_ticks();
        let labels = self.tick_labels(Axis::X, &ticks);
        for (tick, label) in ticks.iter().zip(labels) {
            let x = x_scale.map(*tick);
            if !within(x, plot.width) {
                continue;
            }
            let tick_end = plot.height + style.tick_size_px;
            layer.lines.push(LinePrimitive::new(
                x,
                plot.height,
                x,
                tick_end,
                1.0,
                style.axis_line_color,
            ));
            if label.is_empty() {
                continue;
            }
            layer.texts.push(
                TextPrimitive::new(
                    label,
                    x,
                    tick_end + TICK_LABEL_PADDING_PX + style.tick_font_size_px,
                    style.tick_font_size_px,
                    self.tick_label_color(Axis::X, *tick),
                    align,
                )
                .rotated(rotation),
            );
        }
        layer
    }

    /// Left axis for `Axis::Y`, right axis for `Axis::Y1`.
    pub(super) fn build_y_axis_layer(&self, axis: Axis) -> FrameLayer {
        let kind = if axis == Axis::Y1 {
            LayerKind::Y1Axis
        } else {
            LayerKind::YAxis
        };
        let mut layer = FrameLayer::new(kind);
        if !self.options.render_y_axis || !self.options.axis.get(axis).is_active {
            return layer;
        }
        let plot = self.plot_size();
        let style = self.style;
        let scale = self.scales().scale(axis);
        let (axis_x, direction, align) = if axis == Axis::Y1 {
            (plot.width, 1.0, TextHAlign::Left)
        } else {
            (0.0, -1.0, TextHAlign::Right)
        };

        layer.lines.push(LinePrimitive::new(
            axis_x,
            0.0,
            axis_x,
            plot.height,
            1.0,
            style.axis_line_color,
        ));
        let ticks = self.y_ticks(axis);
        let labels = self.tick_labels(axis, &ticks);
        for (tick, label) in ticks.iter().zip(labels) {
            let y = scale.map(*tick);
            if !within(y, plot.height) {
                continue;
            }
            let tick_end = axis_x + direction * style.tick_size_px;
            layer.lines.push(LinePrimitive::new(
                axis_x,
                y,
                tick_end,
                y,
                1.0,
                style.axis_line_color,
            ));
            if label.is_empty() {
                continue;
            }
            layer.texts.push(TextPrimitive::new(
                label,
                tick_end + direction * TICK_LABEL_PADDING_PX,
                y + style.tick_font_size_px / 3.0,
                style.tick_font_size_px,
                self.tick_label_color(axis, *tick),
                align,
            ));
        }
        layer
    }
}

fn within(pixel: f64, extent: f64) -> bool {
    pixel.is_finite() && (-0.5..=extent + 0.5).contains(&pixel)
}
