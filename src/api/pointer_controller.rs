use tracing::{debug, trace};

use crate::error::{ChartError, ChartResult};
use crate::interaction::{CrosshairSource, InteractionMode, PointerInput};
use crate::render::{LayerKind, Renderer};

use super::render_coordinator::RenderCoordinator;
use super::{
    ChartPod, LegendHit, ListenerKind, MouseMoveEvent, SharedCrosshairEvent, ZoomOutCenter,
};

impl<R: Renderer> ChartPod<R> {
    /// Moves the crosshair and reports the values under the pointer.
    ///
    /// Leaving the plot hides the crosshair. Ignored during brush and pan.
    pub fn mouse_move(&mut self, pointer: PointerInput) -> ChartResult<()> {
        if !self.listeners.contains(ListenerKind::Pointer)
            || self.interaction.mode() != InteractionMode::Idle
        {
            return Ok(());
        }
        let plot = self.plot_size();
        let inside = (0.0..=plot.width).contains(&pointer.x)
            && (0.0..=plot.height).contains(&pointer.y);
        if !inside {
            return self.hide_pointer_crosshair();
        }

        let scales = self.scales();
        let time = scales.x_scale().invert(pointer.x);
        let value = scales.y_scale().invert(pointer.y);
        if self.options.render_crosshair {
            self.interaction
                .show_crosshair(pointer.x, Some(pointer.y), CrosshairSource::Pointer);
            RenderCoordinator::render_partial(self, &[LayerKind::Crosshair], false)?;
        }
        self.callbacks.emit_mouse_move(MouseMoveEvent {
            x: pointer.x,
            y: pointer.y,
            time,
            value,
            shift_key: pointer.shift_key,
        });
        self.callbacks
            .emit_shared_crosshair_move(SharedCrosshairEvent { timestamp: time, value });
        Ok(())
    }

    pub fn mouse_out(&mut self) -> ChartResult<()> {
        if !self.listeners.contains(ListenerKind::Pointer) {
            return Ok(());
        }
        self.hide_pointer_crosshair()?;
        self.callbacks.emit_mouse_out();
        Ok(())
    }

    /// Reports the value at the centre of the current view.
    ///
    /// The view itself is left alone; the host decides how far to zoom out.
    pub fn double_click(&mut self, pointer: PointerInput) -> Option<ZoomOutCenter> {
        if !self.listeners.contains(ListenerKind::Pointer) {
            return None;
        }
        let plot = self.plot_size();
        if !plot.contains(pointer.x, pointer.y) {
            trace!(x = pointer.x, y = pointer.y, "double click outside the plot");
            return None;
        }
        let scales = self.scales();
        let center = ZoomOutCenter {
            x: scales.x_scale().invert(plot.width / 2.0),
            y: scales.y_scale().invert(plot.height / 2.0),
        };
        debug!(x = center.x, y = center.y, "zoom out");
        self.callbacks.emit_zoom_out(center);
        Some(center)
    }

    pub fn context_menu(&mut self, pointer: PointerInput) {
        if !self.listeners.contains(ListenerKind::Pointer) {
            return;
        }
        self.callbacks.emit_context_menu(pointer);
    }

    /// Click on the legend checkbox of series `index`.
    pub fn legend_click(&mut self, index: usize) -> ChartResult<()> {
        self.check_series_index(index)?;
        self.callbacks.emit_legend_click(index);
        Ok(())
    }

    /// Click on the legend label of series `index`.
    pub fn legend_label_click(&mut self, index: usize) -> ChartResult<()> {
        self.check_series_index(index)?;
        self.callbacks.emit_legend_label_click(index);
        Ok(())
    }

    /// Routes a click at a plot-space position to the legend entry under it.
    pub fn click(&mut self, pointer: PointerInput) -> ChartResult<Option<LegendHit>> {
        if !self.listeners.contains(ListenerKind::Pointer) {
            return Ok(None);
        }
        let hit = self.legend_hit(pointer.x, pointer.y)?;
        match hit {
            Some(LegendHit::Checkbox(index)) => self.legend_click(index)?,
            Some(LegendHit::Label(index)) => self.legend_label_click(index)?,
            None => {}
        }
        Ok(hit)
    }

    fn hide_pointer_crosshair(&mut self) -> ChartResult<()> {
        let crosshair = self.interaction.crosshair();
        if !crosshair.visible || crosshair.source != CrosshairSource::Pointer {
            return Ok(());
        }
        self.interaction.hide_crosshair();
        RenderCoordinator::render_partial(self, &[LayerKind::Crosshair], false)
    }

    fn check_series_index(&self, index: usize) -> ChartResult<()> {
        if index >= self.series.len() {
            return Err(ChartError::SeriesIndexOutOfRange {
                index,
                len: self.series.len(),
            });
        }
        Ok(())
    }
}
