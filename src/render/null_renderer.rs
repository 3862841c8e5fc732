use crate::error::ChartResult;
use crate::render::{LayerKind, LayerTransform, PartialFrame, RenderFrame, Renderer};

/// No-op renderer used by tests and headless chart usage.
///
/// It still validates frame content so tests can catch invalid geometry, and
/// it records what the last passes carried.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub full_renders: usize,
    pub partial_renders: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_frame: Option<RenderFrame>,
    pub last_partial_layers: Vec<LayerKind>,
    pub last_metrics_transform: Option<LayerTransform>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.full_renders += 1;
        self.last_line_count = frame.line_count();
        self.last_text_count = frame.text_count();
        self.last_frame = Some(frame.clone());
        Ok(())
    }

    fn render_partial(&mut self, partial: &PartialFrame) -> ChartResult<()> {
        partial.validate()?;
        self.partial_renders += 1;
        self.last_partial_layers = partial.layer_kinds();
        self.last_metrics_transform = partial.metrics_transform;
        Ok(())
    }
}
