mod axis_frame_builder;
mod brush_controller;
mod callbacks;
mod engine;
mod formatters;
mod layout;
mod legend_frame_builder;
mod listeners;
mod metrics_frame_builder;
mod options;
mod overlay_frame_builder;
mod palette;
mod pan_controller;
mod pointer_controller;
mod render_coordinator;
mod render_style;
mod resize_debounce;
mod scale_provider;
mod scroll_controller;
mod shared_crosshair;
mod tick_labels;
mod view_state;

pub use callbacks::{
    ChartCallbacks, MouseMoveEvent, RangeSelection, SharedCrosshairEvent, SharedCrosshairValue,
    ZoomOutCenter,
};
pub use engine::ChartPod;
pub use formatters::{AxisFormatter, AxisFormatters, ColorFormatterFn, ValueFormatterFn};
pub use layout::{ChartLayout, DEFAULT_MARGIN, extra_margin, resolve_margin};
pub use legend_frame_builder::{LegendEntry, LegendHit};
pub use listeners::{AttachedListeners, ListenerKind};
pub use options::{
    AxesOptions, AxisFormat, AxisOptions, BoundsOptions, BrushEventOptions, ChartOptions,
    CrosshairOptions, LabelFormatOptions, METRIC_NAME_PLACEHOLDER, MouseZoomEvents,
    PanEventOptions, ScrollPanOptions, ScrollZoomEvents, ScrollZoomOptions, TickFormatOptions,
    TickOrientation, TimeIntervalOptions, ZoomEventsOptions,
};
pub use palette::{SERIES_PALETTE, palette_color};
pub use render_style::RenderStyle;
pub use resize_debounce::{RESIZE_DEBOUNCE_WINDOW, ResizeDebounce};
pub use scale_provider::{ScaleCache, ScaleProvider};
pub use scroll_controller::MIN_SCROLL_ZOOM;
pub use tick_labels::{format_numeric, format_time};
pub use view_state::{RangeOrigin, ViewRange, ViewState};
