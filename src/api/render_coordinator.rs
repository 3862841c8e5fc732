use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::core::{Axis, Viewport};
use crate::error::ChartResult;
use crate::render::{
    FrameLayer, LayerKind, LayerTransform, PartialFrame, RenderFrame, Renderer,
};

use super::engine::validate_container;
use super::{ChartPod, ListenerKind};

pub(super) struct RenderCoordinator;

impl RenderCoordinator {
    pub(super) fn render<R: Renderer>(pod: &mut ChartPod<R>) -> ChartResult<()> {
        pod.clear_scale_cache(false);
        pod.attach_listeners();
        let frame = pod.build_render_frame()?;
        pod.renderer.render(&frame)?;
        pod.rendered_transform = pod.view.transform();
        pod.has_rendered = true;
        debug!(
            layers = frame.layers.len(),
            lines = frame.line_count(),
            texts = frame.text_count(),
            "rendered full frame"
        );
        Ok(())
    }

    /// Redraws `layers`; with `with_metrics_transform` the metrics layer is
    /// moved by the pan since the last full render.
    pub(super) fn render_partial<R: Renderer>(
        pod: &mut ChartPod<R>,
        layers: &[LayerKind],
        with_metrics_transform: bool,
    ) -> ChartResult<()> {
        if !pod.has_rendered {
            trace!(?layers, "skipping partial render before first full render");
            return Ok(());
        }
        let mut partial = PartialFrame::default();
        for kind in layers {
            partial = partial.with_layer(pod.build_layer(*kind)?);
        }
        if with_metrics_transform {
            partial = partial.with_metrics_transform(pod.metrics_transform());
        }
        pod.renderer.render_partial(&partial)?;
        trace!(?layers, with_metrics_transform, "rendered partial frame");
        Ok(())
    }
}

impl<R: Renderer> ChartPod<R> {
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let layout = self.layout();
        let mut frame = RenderFrame::new(layout.container, layout.margin, layout.plot);
        for kind in LayerKind::PAINT_ORDER {
            frame.layers.push(self.build_layer(kind)?);
        }
        Ok(frame)
    }

    pub(super) fn build_layer(&self, kind: LayerKind) -> ChartResult<FrameLayer> {
        match kind {
            LayerKind::Grid => Ok(self.build_grid_layer()),
            LayerKind::XAxis => Ok(self.build_x_axis_layer()),
            LayerKind::YAxis => Ok(self.build_y_axis_layer(Axis::Y)),
            LayerKind::Y1Axis => Ok(self.build_y_axis_layer(Axis::Y1)),
            LayerKind::Metrics => self.build_metrics_layer(),
            LayerKind::Crosshair => Ok(self.build_crosshair_layer()),
            LayerKind::Brush => Ok(self.build_brush_layer()),
            LayerKind::Legend => self.build_legend_layer(),
            LayerKind::Labels => Ok(self.build_labels_layer()),
        }
    }

    /// Pan offset and zoom since the last full render.
    pub(super) fn metrics_transform(&self) -> LayerTransform {
        let current = self.view.transform();
        LayerTransform::new(
            current.x - self.rendered_transform.x,
            current.y - self.rendered_transform.y,
            current.k,
        )
    }

    pub(super) fn attach_listeners(&mut self) {
        self.listeners.clear();
        self.listeners.insert(ListenerKind::Pointer);
        self.listeners.insert(ListenerKind::Resize);

        if self.options.brush().is_active {
            self.listeners.insert(ListenerKind::Brush);
        }
        if self.options.pan().is_active {
            if self.options.has_brush_pan_key_conflict() {
                warn!(
                    key_event = ?self.options.pan().key_event,
                    "brush and pan share the same key event, skipping pan"
                );
            } else {
                self.listeners.insert(ListenerKind::Pan);
            }
        }
        if self.options.scroll_zoom().is_active || self.options.scroll_pan().is_active {
            self.listeners.insert(ListenerKind::Wheel);
        }
    }

    /// Schedules a debounced re-render for a new container size.
    pub fn resize(&mut self, container: Viewport, now: Instant) {
        if !self.listeners.contains(ListenerKind::Resize) {
            debug!(?container, "resize ignored, listener not attached");
            return;
        }
        self.resize.schedule(container, now);
    }

    /// Applies a pending resize once its debounce window elapsed.
    ///
    /// Returns `true` when a re-render happened.
    pub fn poll_resize(&mut self, now: Instant) -> ChartResult<bool> {
        let Some(container) = self.resize.poll(now) else {
            return Ok(false);
        };
        validate_container(container)?;
        self.container = container;
        self.render()?;
        Ok(true)
    }
}
