use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::interaction::{CrosshairSource, InteractionMode};
use crate::render::{LayerKind, Renderer};

use super::render_coordinator::RenderCoordinator;
use super::{ChartPod, SharedCrosshairValue};

impl<R: Renderer> ChartPod<R> {
    /// Places a crosshair driven by another chart's pointer.
    ///
    /// A timestamp outside the current x domain hides it instead. Nothing is
    /// re-emitted through `shared_crosshair_move`.
    pub fn render_shared_crosshair(&mut self, shared: SharedCrosshairValue) -> ChartResult<()> {
        if !shared.timestamp.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "shared crosshair timestamp must be finite, got {}",
                shared.timestamp
            )));
        }
        if self.interaction.mode() != InteractionMode::Idle {
            trace!("shared crosshair ignored during gesture");
            return Ok(());
        }
        let plot = self.plot_size();
        let scales = self.scales();
        let x = scales.x_scale().map(shared.timestamp);
        if !(0.0..=plot.width).contains(&x) {
            return self.hide_shared_crosshair();
        }
        let y = shared
            .value
            .filter(|value| value.is_finite())
            .map(|value| scales.y_scale().map(value));

        self.interaction.show_crosshair(x, y, CrosshairSource::Shared);
        RenderCoordinator::render_partial(self, &[LayerKind::Crosshair], false)
    }

    /// Removes a crosshair placed by `render_shared_crosshair`.
    pub fn hide_shared_crosshair(&mut self) -> ChartResult<()> {
        let crosshair = self.interaction.crosshair();
        if !crosshair.visible || crosshair.source != CrosshairSource::Shared {
            return Ok(());
        }
        self.interaction.hide_crosshair();
        RenderCoordinator::render_partial(self, &[LayerKind::Crosshair], false)
    }
}
