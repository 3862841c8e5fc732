use tracing::{debug, trace, warn};

use crate::core::{Axis, sorted_pair};
use crate::error::ChartResult;
use crate::interaction::{
    InteractionMode, PanSnapshot, PartialTransform, PointerInput, ZoomEvent, ZoomSource,
    shift_range,
};
use crate::render::{LayerKind, Renderer};

use super::render_coordinator::RenderCoordinator;
use super::{ChartPod, ListenerKind};

/// Layers redrawn while the view pans; metrics follow via the layer transform.
pub(super) const PAN_LAYERS: [LayerKind; 5] = [
    LayerKind::Grid,
    LayerKind::XAxis,
    LayerKind::YAxis,
    LayerKind::Y1Axis,
    LayerKind::Crosshair,
];

impl<R: Renderer> ChartPod<R> {
    /// Feeds one event of the host's zoom behavior (pointer drag or wheel).
    ///
    /// Events without a source device are programmatic and ignored.
    pub fn on_zoom(&mut self, event: ZoomEvent) -> ChartResult<()> {
        let transform = event.transform;
        if !(transform.k.is_finite() && transform.k > 0.0)
            || !transform.x.is_finite()
            || !transform.y.is_finite()
        {
            warn!(?transform, "ignoring zoom event with invalid transform");
            return Ok(());
        }
        match event.source {
            None => {
                trace!("zoom event without source ignored");
                Ok(())
            }
            Some(ZoomSource::Pointer(pointer)) => self.drag_pan(event, pointer),
            Some(ZoomSource::Wheel(wheel)) => self.wheel(event, wheel),
        }
    }

    /// Ends a drag or wheel pan and reports the final ranges.
    pub fn pan_end(&mut self) -> ChartResult<()> {
        if self.interaction.mode() != InteractionMode::Panning {
            return Ok(());
        }
        self.interaction.on_pan_end();
        let ranges = self.view.ranges();
        debug!(?ranges, "pan ended");
        self.callbacks.emit_panning_end(ranges);
        Ok(())
    }

    fn drag_pan(&mut self, event: ZoomEvent, pointer: PointerInput) -> ChartResult<()> {
        let pan = *self.options.pan();
        if !self.listeners.contains(ListenerKind::Pan) || !pan.key_event.matches(pointer.shift_key) {
            trace!(shift_key = pointer.shift_key, "drag pan ignored");
            return Ok(());
        }
        let snapshot = match (self.interaction.mode(), self.interaction.pan_snapshot()) {
            (InteractionMode::Brushing, _) => return Ok(()),
            (InteractionMode::Panning, Some(snapshot)) => snapshot,
            _ => {
                let snapshot = self.pan_snapshot();
                self.interaction.on_pan_start(Some(snapshot));
                debug!(orientation = ?pan.orientation, "drag pan started");
                snapshot
            }
        };

        let scales = self.scales();
        let k = event.transform.k;
        let dx = event.transform.x - snapshot.transform.x;
        let dy = event.transform.y - snapshot.transform.y;
        let value_dx = scales.abs_x_scale().invert(dx.abs()) * dx.signum();
        let value_dy =
            scales.abs_y_scale().invert(dy.abs()) * dy.signum() * self.y_invert_sign();

        let mut transform = PartialTransform {
            k: Some(k),
            ..PartialTransform::default()
        };
        if pan.orientation.pans_x() {
            self.view
                .set_range(Axis::X, shift_range(snapshot.x_range, -value_dx / k));
            transform.x = Some(event.transform.x);
        }
        if pan.orientation.pans_y() {
            self.view
                .set_range(Axis::Y, shift_range(snapshot.y_range, value_dy / k));
            transform.y = Some(event.transform.y);
        }
        self.view.set_transform(transform);
        self.clear_scale_cache(false);

        RenderCoordinator::render_partial(self, &PAN_LAYERS, true)?;
        self.callbacks.emit_panning(self.view.ranges(), &event);
        Ok(())
    }

    /// Ranges and transform a drag pan is measured from.
    fn pan_snapshot(&self) -> PanSnapshot {
        let scales = self.scales();
        PanSnapshot {
            x_range: sorted_pair(scales.domain(Axis::X)),
            y_range: sorted_pair(scales.domain(Axis::Y)),
            transform: self.view.transform(),
        }
    }

    /// `-1` when the y axis is inverted; vertical value deltas flip with it.
    pub(super) fn y_invert_sign(&self) -> f64 {
        if self.options.axis.y.invert { -1.0 } else { 1.0 }
    }
}
