use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::interaction::{PointerInput, ZoomEvent};

/// Value ranges per axis, as reported to zoom and pan callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RangeSelection {
    pub x: Option<(f64, f64)>,
    pub y: Option<(f64, f64)>,
    pub y1: Option<(f64, f64)>,
}

/// Values at the middle of the current view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomOutCenter {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MouseMoveEvent {
    /// Pointer position in plot pixels.
    pub x: f64,
    pub y: f64,
    /// Timestamp under the pointer.
    pub time: f64,
    /// Y value under the pointer.
    pub value: f64,
    pub shift_key: bool,
}

/// Position broadcast to sibling charts that share a crosshair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SharedCrosshairEvent {
    pub timestamp: f64,
    pub value: f64,
}

/// Crosshair placement requested by a sibling chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SharedCrosshairValue {
    pub timestamp: f64,
    pub value: Option<f64>,
}

impl SharedCrosshairValue {
    #[must_use]
    pub const fn at(timestamp: f64) -> Self {
        Self {
            timestamp,
            value: None,
        }
    }

    #[must_use]
    pub const fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }
}

impl From<SharedCrosshairEvent> for SharedCrosshairValue {
    fn from(event: SharedCrosshairEvent) -> Self {
        Self {
            timestamp: event.timestamp,
            value: Some(event.value),
        }
    }
}

type RangeCallback = Box<dyn FnMut(RangeSelection)>;
type PanningCallback = Box<dyn FnMut(RangeSelection, &ZoomEvent)>;
type IndexCallback = Box<dyn FnMut(usize)>;

/// Host notifications. Every callback is optional; a missing one is logged.
#[derive(Default)]
pub struct ChartCallbacks {
    zoom_in: Option<RangeCallback>,
    zoom_out: Option<Box<dyn FnMut(ZoomOutCenter)>>,
    panning: Option<PanningCallback>,
    panning_end: Option<RangeCallback>,
    mouse_move: Option<Box<dyn FnMut(MouseMoveEvent)>>,
    mouse_out: Option<Box<dyn FnMut()>>,
    legend_click: Option<IndexCallback>,
    legend_label_click: Option<IndexCallback>,
    context_menu: Option<Box<dyn FnMut(PointerInput)>>,
    shared_crosshair_move: Option<Box<dyn FnMut(SharedCrosshairEvent)>>,
}

impl fmt::Debug for ChartCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartCallbacks")
            .field("zoom_in", &self.zoom_in.is_some())
            .field("zoom_out", &self.zoom_out.is_some())
            .field("panning", &self.panning.is_some())
            .field("panning_end", &self.panning_end.is_some())
            .field("mouse_move", &self.mouse_move.is_some())
            .field("mouse_out", &self.mouse_out.is_some())
            .field("legend_click", &self.legend_click.is_some())
            .field("legend_label_click", &self.legend_label_click.is_some())
            .field("context_menu", &self.context_menu.is_some())
            .field(
                "shared_crosshair_move",
                &self.shared_crosshair_move.is_some(),
            )
            .finish()
    }
}

impl ChartCallbacks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_zoom_in(mut self, callback: impl FnMut(RangeSelection) + 'static) -> Self {
        self.zoom_in = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_zoom_out(mut self, callback: impl FnMut(ZoomOutCenter) + 'static) -> Self {
        self.zoom_out = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_panning(
        mut self,
        callback: impl FnMut(RangeSelection, &ZoomEvent) + 'static,
    ) -> Self {
        self.panning = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_panning_end(mut self, callback: impl FnMut(RangeSelection) + 'static) -> Self {
        self.panning_end = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_mouse_move(mut self, callback: impl FnMut(MouseMoveEvent) + 'static) -> Self {
        self.mouse_move = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_mouse_out(mut self, callback: impl FnMut() + 'static) -> Self {
        self.mouse_out = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_legend_click(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.legend_click = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_legend_label_click(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.legend_label_click = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_context_menu(mut self, callback: impl FnMut(PointerInput) + 'static) -> Self {
        self.context_menu = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_shared_crosshair_move(
        mut self,
        callback: impl FnMut(SharedCrosshairEvent) + 'static,
    ) -> Self {
        self.shared_crosshair_move = Some(Box::new(callback));
        self
    }

    pub(super) fn emit_zoom_in(&mut self, ranges: RangeSelection) {
        match self.zoom_in.as_mut() {
            Some(callback) => callback(ranges),
            None => debug!(?ranges, "zoom in, but there is no callback"),
        }
    }

    pub(super) fn emit_zoom_out(&mut self, center: ZoomOutCenter) {
        match self.zoom_out.as_mut() {
            Some(callback) => callback(center),
            None => debug!(x = center.x, y = center.y, "zoom out, but there is no callback"),
        }
    }

    pub(super) fn emit_panning(&mut self, ranges: RangeSelection, event: &ZoomEvent) {
        match self.panning.as_mut() {
            Some(callback) => callback(ranges, event),
            None => debug!(?ranges, "on panning, but there is no callback"),
        }
    }

    pub(super) fn emit_panning_end(&mut self, ranges: RangeSelection) {
        match self.panning_end.as_mut() {
            Some(callback) => callback(ranges),
            None => debug!(?ranges, "on panning end, but there is no callback"),
        }
    }

    pub(super) fn emit_mouse_move(&mut self, event: MouseMoveEvent) {
        match self.mouse_move.as_mut() {
            Some(callback) => callback(event),
            None => debug!(x = event.x, y = event.y, "mouse move, but there is no callback"),
        }
    }

    pub(super) fn emit_mouse_out(&mut self) {
        match self.mouse_out.as_mut() {
            Some(callback) => callback(),
            None => debug!("mouse out, but there is no callback"),
        }
    }

    pub(super) fn emit_legend_click(&mut self, index: usize) {
        match self.legend_click.as_mut() {
            Some(callback) => callback(index),
            None => debug!(index, "legend click, but there is no callback"),
        }
    }

    pub(super) fn emit_legend_label_click(&mut self, index: usize) {
        match self.legend_label_click.as_mut() {
            Some(callback) => callback(index),
            None => debug!(index, "legend label click, but there is no callback"),
        }
    }

    pub(super) fn emit_context_menu(&mut self, pointer: PointerInput) {
        match self.context_menu.as_mut() {
            Some(callback) => callback(pointer),
            None => debug!(x = pointer.x, y = pointer.y, "context menu, but there is no callback"),
        }
    }

    pub(super) fn emit_shared_crosshair_move(&mut self, event: SharedCrosshairEvent) {
        match self.shared_crosshair_move.as_mut() {
            Some(callback) => callback(event),
            None => debug!(
                timestamp = event.timestamp,
                value = event.value,
                "shared crosshair move, but there is no callback"
            ),
        }
    }
}
