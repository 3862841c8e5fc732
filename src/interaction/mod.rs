mod brush;
mod pan;

pub use brush::{BrushOrientation, SelectionRect, square_selection};
pub use pan::{
    PanOrientation, PanSnapshot, SCROLL_PAN_LIMIT_RATIO, SCROLL_PAN_MAX_STEP_RATIO,
    ScrollPanOrientation, ScrollPanTracker, shift_range,
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    #[default]
    Idle,
    Brushing,
    Panning,
}

/// Modifier-key gate assigned to a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyEvent {
    /// Gesture runs when shift is not pressed.
    #[default]
    Main,
    /// Gesture runs only while shift is pressed.
    Shift,
}

impl KeyEvent {
    #[must_use]
    pub const fn matches(self, shift_key: bool) -> bool {
        match self {
            Self::Main => !shift_key,
            Self::Shift => shift_key,
        }
    }
}

/// Pointer position in plot coordinates (origin at the plot's top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerInput {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub shift_key: bool,
}

impl PointerInput {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            shift_key: false,
        }
    }

    #[must_use]
    pub const fn with_shift(mut self) -> Self {
        self.shift_key = true;
        self
    }

    #[must_use]
    pub const fn position(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Wheel tick in plot coordinates; deltas in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WheelInput {
    pub x: f64,
    pub y: f64,
    pub delta_x: f64,
    pub delta_y: f64,
    #[serde(default)]
    pub shift_key: bool,
}

impl WheelInput {
    #[must_use]
    pub const fn vertical(delta_y: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            delta_x: 0.0,
            delta_y,
            shift_key: false,
        }
    }

    #[must_use]
    pub const fn with_shift(mut self) -> Self {
        self.shift_key = true;
        self
    }

    /// Sign used by horizontal stepped pans: the horizontal delta when
    /// present, the vertical one otherwise.
    #[must_use]
    pub fn horizontal_sign(self) -> f64 {
        let delta = if self.delta_x != 0.0 {
            self.delta_x
        } else {
            self.delta_y
        };
        if delta == 0.0 { 0.0 } else { delta.signum() }
    }
}

/// Pan translation and zoom factor. `k` is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    pub x: f64,
    pub y: f64,
    pub k: f64,
}

impl ZoomTransform {
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        k: 1.0,
    };

    #[must_use]
    pub const fn new(x: f64, y: f64, k: f64) -> Self {
        Self { x, y, k }
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Transform update where absent fields keep their previous value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PartialTransform {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub k: Option<f64>,
}

/// Input device that produced a zoom-behavior event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ZoomSource {
    Pointer(PointerInput),
    Wheel(WheelInput),
}

/// Event emitted by the host's zoom behavior while the user drags or scrolls.
///
/// `transform` is the behavior's current cumulative transform. Events without
/// a source (programmatic transform changes) are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomEvent {
    pub transform: ZoomTransform,
    pub source: Option<ZoomSource>,
}

impl ZoomEvent {
    #[must_use]
    pub const fn drag(transform: ZoomTransform, pointer: PointerInput) -> Self {
        Self {
            transform,
            source: Some(ZoomSource::Pointer(pointer)),
        }
    }

    #[must_use]
    pub const fn wheel(transform: ZoomTransform, wheel: WheelInput) -> Self {
        Self {
            transform,
            source: Some(ZoomSource::Wheel(wheel)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrosshairOrientation {
    #[default]
    Vertical,
    Horizontal,
    Both,
}

impl CrosshairOrientation {
    #[must_use]
    pub const fn draws_vertical(self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }

    #[must_use]
    pub const fn draws_horizontal(self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }
}

/// Who placed the crosshair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrosshairSource {
    Pointer,
    Shared,
}

/// Crosshair position in plot pixels. `y` is absent when only a timestamp is known.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrosshairState {
    pub visible: bool,
    pub x: f64,
    pub y: Option<f64>,
    pub source: CrosshairSource,
}

impl Default for CrosshairState {
    fn default() -> Self {
        Self {
            visible: false,
            x: 0.0,
            y: None,
            source: CrosshairSource::Pointer,
        }
    }
}

/// Gesture state of one chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    mode: InteractionMode,
    brush_anchor: Option<(f64, f64)>,
    brush_selection: Option<SelectionRect>,
    pan: Option<PanSnapshot>,
    scroll_pan: ScrollPanTracker,
    crosshair: CrosshairState,
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn crosshair(self) -> CrosshairState {
        self.crosshair
    }

    #[must_use]
    pub fn brush_anchor(self) -> Option<(f64, f64)> {
        self.brush_anchor
    }

    #[must_use]
    pub fn brush_selection(self) -> Option<SelectionRect> {
        self.brush_selection
    }

    #[must_use]
    pub fn pan_snapshot(self) -> Option<PanSnapshot> {
        self.pan
    }

    #[must_use]
    pub fn scroll_pan(self) -> ScrollPanTracker {
        self.scroll_pan
    }

    pub fn scroll_pan_mut(&mut self) -> &mut ScrollPanTracker {
        &mut self.scroll_pan
    }

    pub fn on_brush_start(&mut self, anchor: (f64, f64)) {
        self.mode = InteractionMode::Brushing;
        self.brush_anchor = Some(anchor);
        self.brush_selection = None;
        self.hide_crosshair();
    }

    pub fn set_brush_selection(&mut self, selection: SelectionRect) {
        self.brush_selection = Some(selection);
    }

    /// Ends the brush gesture, returning the anchor it started from.
    pub fn on_brush_end(&mut self) -> Option<(f64, f64)> {
        self.mode = InteractionMode::Idle;
        self.brush_selection = None;
        self.brush_anchor.take()
    }

    pub fn on_pan_start(&mut self, snapshot: Option<PanSnapshot>) {
        self.mode = InteractionMode::Panning;
        self.pan = snapshot;
        self.hide_crosshair();
    }

    pub fn on_pan_end(&mut self) {
        self.mode = InteractionMode::Idle;
        self.pan = None;
        self.scroll_pan.reset();
    }

    pub fn show_crosshair(&mut self, x: f64, y: Option<f64>, source: CrosshairSource) {
        self.crosshair = CrosshairState {
            visible: true,
            x,
            y,
            source,
        };
    }

    pub fn hide_crosshair(&mut self) {
        self.crosshair.visible = false;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_gates_on_shift() {
        assert!(KeyEvent::Main.matches(false));
        assert!(!KeyEvent::Main.matches(true));
        assert!(KeyEvent::Shift.matches(true));
        assert!(!KeyEvent::Shift.matches(false));
    }

    #[test]
    fn brush_lifecycle_assigns_mode_and_clears_anchor() {
        let mut state = InteractionState::default();
        state.show_crosshair(5.0, Some(5.0), CrosshairSource::Pointer);

        state.on_brush_start((10.0, 20.0));
        assert_eq!(state.mode(), InteractionMode::Brushing);
        assert!(!state.crosshair().visible);

        assert_eq!(state.on_brush_end(), Some((10.0, 20.0)));
        assert_eq!(state.mode(), InteractionMode::Idle);
        assert_eq!(state.brush_anchor(), None);
    }

    #[test]
    fn pan_end_resets_scroll_tracker() {
        let mut state = InteractionState::default();
        state.on_pan_start(None);
        assert!(state.scroll_pan_mut().try_accumulate(12.0, 100.0));
        state.on_pan_end();
        assert_eq!(state.mode(), InteractionMode::Idle);
        assert_eq!(state.scroll_pan().accumulated_y(), 0.0);
    }

    #[test]
    fn horizontal_sign_prefers_horizontal_delta() {
        let wheel = WheelInput {
            delta_x: -3.0,
            delta_y: 40.0,
            ..WheelInput::default()
        };
        assert_eq!(wheel.horizontal_sign(), -1.0);
        assert_eq!(WheelInput::vertical(40.0).horizontal_sign(), 1.0);
        assert_eq!(WheelInput::vertical(0.0).horizontal_sign(), 0.0);
    }
}
