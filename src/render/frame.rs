use crate::core::{Margin, PlotSize, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, PolylinePrimitive, RectPrimitive, TextPrimitive};

/// Named groups of a chart drawing, in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Grid,
    XAxis,
    YAxis,
    Y1Axis,
    Metrics,
    Crosshair,
    Brush,
    Legend,
    Labels,
}

impl LayerKind {
    pub const PAINT_ORDER: [Self; 9] = [
        Self::Grid,
        Self::XAxis,
        Self::YAxis,
        Self::Y1Axis,
        Self::Metrics,
        Self::Crosshair,
        Self::Brush,
        Self::Legend,
        Self::Labels,
    ];

    /// Stable identifier used as the SVG group class.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::XAxis => "x-axis",
            Self::YAxis => "y-axis",
            Self::Y1Axis => "y1-axis",
            Self::Metrics => "metrics",
            Self::Crosshair => "crosshair",
            Self::Brush => "brush",
            Self::Legend => "legend",
            Self::Labels => "labels",
        }
    }

    /// Layers redrawn when only the axes are rescaled during a pan.
    #[must_use]
    pub const fn is_axis_rescale_layer(self) -> bool {
        matches!(self, Self::Grid | Self::XAxis | Self::YAxis | Self::Y1Axis)
    }
}

/// Translate-then-scale applied to a whole layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl LayerTransform {
    #[must_use]
    pub const fn new(translate_x: f64, translate_y: f64, scale: f64) -> Self {
        Self {
            translate_x,
            translate_y,
            scale,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayer {
    pub kind: LayerKind,
    pub clip_to_plot: bool,
    pub transform: Option<LayerTransform>,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
}

impl FrameLayer {
    #[must_use]
    pub fn new(kind: LayerKind) -> Self {
        Self {
            kind,
            clip_to_plot: false,
            transform: None,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
            polylines: Vec::new(),
        }
    }

    #[must_use]
    pub fn clipped(mut self) -> Self {
        self.clip_to_plot = true;
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.rects.is_empty()
            && self.texts.is_empty()
            && self.polylines.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        if let Some(transform) = self.transform {
            if !transform.translate_x.is_finite()
                || !transform.translate_y.is_finite()
                || !transform.scale.is_finite()
                || transform.scale <= 0.0
            {
                return Err(ChartError::InvalidData(format!(
                    "layer `{}` transform must be finite with scale > 0",
                    self.kind.name()
                )));
            }
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one full chart draw pass.
///
/// Primitive coordinates are relative to the plot origin, which sits at
/// `(margin.left, margin.top)` inside the container.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub margin: Margin,
    pub plot: PlotSize,
    pub layers: Vec<FrameLayer>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, margin: Margin, plot: PlotSize) -> Self {
        Self {
            viewport,
            margin,
            plot,
            layers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_layer(mut self, layer: FrameLayer) -> Self {
        self.layers.push(layer);
        self
    }

    #[must_use]
    pub fn layer(&self, kind: LayerKind) -> Option<&FrameLayer> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    /// Replaces the layer of the same kind, or inserts it in paint order.
    pub fn replace_layer(&mut self, layer: FrameLayer) {
        if let Some(slot) = self.layers.iter_mut().find(|slot| slot.kind == layer.kind) {
            *slot = layer;
            return;
        }
        let order = |kind: LayerKind| {
            LayerKind::PAINT_ORDER
                .iter()
                .position(|candidate| *candidate == kind)
                .unwrap_or(LayerKind::PAINT_ORDER.len())
        };
        let rank = order(layer.kind);
        let index = self
            .layers
            .iter()
            .position(|slot| order(slot.kind) > rank)
            .unwrap_or(self.layers.len());
        self.layers.insert(index, layer);
    }

    /// Applies a partial update on top of this frame.
    pub fn apply_partial(&mut self, partial: &PartialFrame) {
        for layer in &partial.layers {
            self.replace_layer(layer.clone());
        }
        if let Some(transform) = partial.metrics_transform {
            if let Some(metrics) = self
                .layers
                .iter_mut()
                .find(|layer| layer.kind == LayerKind::Metrics)
            {
                metrics.transform = Some(transform);
            }
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.margin.is_finite() {
            return Err(ChartError::InvalidData("margin must be finite".to_owned()));
        }
        for layer in &self.layers {
            layer.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.lines.len()).sum()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.texts.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(FrameLayer::is_empty)
    }
}

/// Update for an already drawn frame: replaced layers plus an optional
/// transform re-applied to the metrics layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PartialFrame {
    pub layers: Vec<FrameLayer>,
    pub metrics_transform: Option<LayerTransform>,
}

impl PartialFrame {
    #[must_use]
    pub fn with_layer(mut self, layer: FrameLayer) -> Self {
        self.layers.push(layer);
        self
    }

    #[must_use]
    pub fn with_metrics_transform(mut self, transform: LayerTransform) -> Self {
        self.metrics_transform = Some(transform);
        self
    }

    #[must_use]
    pub fn layer_kinds(&self) -> Vec<LayerKind> {
        self.layers.iter().map(|layer| layer.kind).collect()
    }

    pub fn validate(&self) -> ChartResult<()> {
        for layer in &self.layers {
            layer.validate()?;
        }
        Ok(())
    }
}
