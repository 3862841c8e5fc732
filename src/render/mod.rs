mod frame;
mod null_renderer;
mod primitives;
mod svg_renderer;

pub use frame::{FrameLayer, LayerKind, LayerTransform, PartialFrame, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, PolylinePrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};
pub use svg_renderer::SvgRenderer;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive fully materialized, deterministic frames so drawing code
/// remains isolated from chart domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;

    /// Redraws only the layers carried by `partial` on top of the last full frame.
    fn render_partial(&mut self, partial: &PartialFrame) -> ChartResult<()>;
}
