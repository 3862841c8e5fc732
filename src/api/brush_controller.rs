use tracing::{debug, trace};

use crate::core::{Axis, PlotSize, sorted_pair};
use crate::error::ChartResult;
use crate::interaction::{BrushOrientation, InteractionMode, PointerInput, SelectionRect};
use crate::render::{LayerKind, Renderer};

use super::render_coordinator::RenderCoordinator;
use super::{ChartPod, ListenerKind, RangeSelection};

impl<R: Renderer> ChartPod<R> {
    /// Starts a zoom box at `pointer` when the brush gesture accepts it.
    pub fn brush_start(&mut self, pointer: PointerInput) -> ChartResult<()> {
        let brush = *self.options.brush();
        if !self.listeners.contains(ListenerKind::Brush) || !brush.key_event.matches(pointer.shift_key)
        {
            trace!(shift_key = pointer.shift_key, "brush start ignored");
            return Ok(());
        }
        if self.interaction.mode() != InteractionMode::Idle {
            debug!(mode = ?self.interaction.mode(), "brush start ignored, gesture in progress");
            return Ok(());
        }
        let anchor = clamp_to_plot(pointer.position(), self.plot_size());
        self.interaction.on_brush_start(anchor);
        debug!(?anchor, orientation = ?brush.orientation, "brush started");
        RenderCoordinator::render_partial(self, &[LayerKind::Crosshair], false)
    }

    /// Updates the zoom box while the pointer moves.
    pub fn brush_move(&mut self, pointer: PointerInput) -> ChartResult<()> {
        let Some(selection) = self.pending_selection(pointer) else {
            return Ok(());
        };
        self.interaction.set_brush_selection(selection);
        RenderCoordinator::render_partial(self, &[LayerKind::Brush], false)
    }

    /// Finishes the brush at `pointer` and zooms into the selection.
    ///
    /// Returns the applied ranges, or `None` when the selection is too small
    /// to zoom into. Only the axes the brush orientation selects are set.
    pub fn brush_end(&mut self, pointer: PointerInput) -> ChartResult<Option<RangeSelection>> {
        let Some(selection) = self.pending_selection(pointer) else {
            return Ok(None);
        };
        let orientation = self.options.brush().orientation;
        self.interaction.on_brush_end();
        RenderCoordinator::render_partial(self, &[LayerKind::Brush], false)?;

        let Some(ranges) = self.selection_ranges(orientation, selection) else {
            debug!(?selection, ?orientation, "brush selection too small, ignoring");
            return Ok(None);
        };
        if let Some(x) = ranges.x {
            self.view.set_range(Axis::X, x);
        }
        if let Some(y) = ranges.y {
            self.view.set_range(Axis::Y, y);
        }
        self.clear_scale_cache(false);
        debug!(?ranges, "brush zoomed in");
        self.callbacks.emit_zoom_in(ranges);
        self.render()?;
        Ok(Some(ranges))
    }

    fn pending_selection(&self, pointer: PointerInput) -> Option<SelectionRect> {
        if self.interaction.mode() != InteractionMode::Brushing {
            return None;
        }
        let anchor = self.interaction.brush_anchor()?;
        let plot = self.plot_size();
        let position = clamp_to_plot(pointer.position(), plot);
        Some(self.options.brush().orientation.selection(anchor, position, plot))
    }

    /// Value ranges under `selection`, ascending; `None` for an empty or
    /// sub-interval selection.
    fn selection_ranges(
        &self,
        orientation: BrushOrientation,
        selection: SelectionRect,
    ) -> Option<RangeSelection> {
        let scales = self.scales();
        let invert = |axis: Axis, (from, to): (f64, f64)| {
            let scale = scales.scale(axis);
            sorted_pair((scale.invert(from), scale.invert(to)))
        };
        let mut ranges = RangeSelection::default();

        if orientation.selects_x() {
            if selection.width <= 0.0 {
                return None;
            }
            let x = invert(Axis::X, selection.x_extent());
            if orientation == BrushOrientation::Horizontal && x.1 - x.0 < self.time_interval() {
                return None;
            }
            ranges.x = Some(x);
        }
        if orientation.selects_y() {
            if selection.height <= 0.0 {
                return None;
            }
            ranges.y = Some(invert(Axis::Y, selection.y_extent()));
        }
        Some(ranges)
    }
}

fn clamp_to_plot((x, y): (f64, f64), plot: PlotSize) -> (f64, f64) {
    (x.clamp(0.0, plot.width), y.clamp(0.0, plot.height))
}
