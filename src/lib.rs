//! chart-pod: interactive time-series chart engine.
//!
//! A `ChartPod` turns series and options into scales and layered draw
//! frames, and turns host pointer/wheel input into brush zooms, pans and
//! crosshair moves. Drawing goes through the `Renderer` trait; an SVG
//! renderer and a headless renderer ship with the crate.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartCallbacks, ChartOptions, ChartPod};
pub use error::{ChartError, ChartResult};
