use tracing::{debug, trace};

use crate::core::{Axis, sorted_pair};
use crate::error::ChartResult;
use crate::interaction::{
    InteractionMode, PartialTransform, ScrollPanOrientation, ScrollPanTracker, WheelInput,
    ZoomEvent, shift_range,
};
use crate::render::Renderer;

use super::pan_controller::PAN_LAYERS;
use super::render_coordinator::RenderCoordinator;
use super::{ChartPod, ListenerKind};

/// Smallest zoom factor a wheel zoom may reach.
pub const MIN_SCROLL_ZOOM: f64 = 0.5;

impl<R: Renderer> ChartPod<R> {
    /// Wheel events: a stepped pan when the scroll-pan key matches, otherwise
    /// a zoom-factor change when the scroll-zoom key matches.
    pub(super) fn wheel(&mut self, event: ZoomEvent, wheel: WheelInput) -> ChartResult<()> {
        if !self.listeners.contains(ListenerKind::Wheel)
            || self.interaction.mode() == InteractionMode::Brushing
        {
            trace!("wheel event ignored");
            return Ok(());
        }
        let scroll_pan = *self.options.scroll_pan();
        let scroll_zoom = *self.options.scroll_zoom();

        if scroll_pan.is_active && scroll_pan.key_event.matches(wheel.shift_key) {
            self.begin_wheel_gesture();
            let panned = match scroll_pan.orientation {
                ScrollPanOrientation::Horizontal => self.step_pan_x(wheel, scroll_pan.pan_step),
                ScrollPanOrientation::Vertical => self.step_pan_y(wheel),
            };
            if !panned {
                return Ok(());
            }
            self.clear_scale_cache(false);
            RenderCoordinator::render_partial(self, &PAN_LAYERS, true)?;
            self.callbacks.emit_panning(self.view.ranges(), &event);
            return Ok(());
        }

        if scroll_zoom.is_active && scroll_zoom.key_event.matches(wheel.shift_key) {
            self.begin_wheel_gesture();
            let k = event.transform.k.max(MIN_SCROLL_ZOOM);
            self.view.set_transform(PartialTransform {
                k: Some(k),
                ..PartialTransform::default()
            });
            trace!(k, "wheel zoom");
            return RenderCoordinator::render_partial(self, &[], true);
        }

        trace!(shift_key = wheel.shift_key, "wheel event matches no gesture");
        Ok(())
    }

    fn begin_wheel_gesture(&mut self) {
        if self.interaction.mode() == InteractionMode::Idle {
            self.interaction.on_pan_start(None);
        }
    }

    /// Moves the x range by a constant `pan_step` pixels in the wheel direction.
    fn step_pan_x(&mut self, wheel: WheelInput, pan_step: f64) -> bool {
        let sign = wheel.horizontal_sign();
        if sign == 0.0 {
            return false;
        }
        let scales = self.scales();
        let value_step = scales.abs_x_scale().invert(pan_step) * sign;
        let range = shift_range(sorted_pair(scales.domain(Axis::X)), value_step);
        let translate_x = self.view.transform().x - sign * pan_step;

        self.view.set_range(Axis::X, range);
        self.view.set_transform(PartialTransform {
            x: Some(translate_x),
            ..PartialTransform::default()
        });
        true
    }

    /// Moves the y range by the clamped wheel delta until the gesture limit.
    fn step_pan_y(&mut self, wheel: WheelInput) -> bool {
        let height = self.plot_size().height;
        let step = ScrollPanTracker::clamp_step(wheel.delta_y, height);
        if step == 0.0 || !step.is_finite() {
            return false;
        }
        if !self.interaction.scroll_pan_mut().try_accumulate(step, height) {
            debug!(
                accumulated = self.interaction.scroll_pan().accumulated_y(),
                step, "vertical wheel pan limit reached"
            );
            return false;
        }
        let scales = self.scales();
        let value_step =
            scales.abs_y_scale().invert(step.abs()) * step.signum() * self.y_invert_sign();
        let range = shift_range(sorted_pair(scales.domain(Axis::Y)), -value_step);
        let translate_y = self.view.transform().y - step;

        self.view.set_range(Axis::Y, range);
        self.view.set_transform(PartialTransform {
            y: Some(translate_y),
            ..PartialTransform::default()
        });
        true
    }
}
