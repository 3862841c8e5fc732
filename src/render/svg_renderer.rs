use std::fmt::Write as _;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, FrameLayer, LayerTransform, PartialFrame, RenderFrame, Renderer, TextHAlign,
};

const PLOT_CLIP_ID: &str = "plot-clip";

/// Renderer that keeps the current scene and serializes it as SVG.
///
/// Partial passes patch the stored scene, so `document()` always reflects the
/// latest full render plus every partial update since.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    scene: Option<RenderFrame>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn scene(&self) -> Option<&RenderFrame> {
        self.scene.as_ref()
    }

    /// SVG text for the current scene, or `None` before the first full render.
    #[must_use]
    pub fn document(&self) -> Option<String> {
        self.scene.as_ref().map(render_svg_document)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.scene = Some(frame.clone());
        Ok(())
    }

    fn render_partial(&mut self, partial: &PartialFrame) -> ChartResult<()> {
        partial.validate()?;
        let scene = self.scene.as_mut().ok_or_else(|| {
            ChartError::InvalidData("partial render requires a prior full render".to_owned())
        })?;
        scene.apply_partial(partial);
        Ok(())
    }
}

fn render_svg_document(frame: &RenderFrame) -> String {
    let width = frame.viewport.width;
    let height = frame.viewport.height;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );
    let _ = write!(
        svg,
        "<defs><clipPath id=\"{PLOT_CLIP_ID}\"><rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\"/></clipPath></defs>",
        fmt_num(frame.plot.width),
        fmt_num(frame.plot.height)
    );
    let _ = write!(
        svg,
        "<g transform=\"translate({} {})\">",
        fmt_num(frame.margin.left),
        fmt_num(frame.margin.top)
    );
    for layer in &frame.layers {
        write_layer(&mut svg, layer);
    }
    svg.push_str("</g></svg>");
    svg
}

fn write_layer(out: &mut String, layer: &FrameLayer) {
    let _ = write!(out, "<g class=\"{}\"", layer.kind.name());
    if layer.clip_to_plot {
        let _ = write!(out, " clip-path=\"url(#{PLOT_CLIP_ID})\"");
    }
    out.push('>');

    // The clip stays in plot space while the content moves.
    let transformed = layer.transform.is_some();
    if let Some(transform) = layer.transform {
        write_transform_group(out, transform);
    }

    for rect in &layer.rects {
        let _ = write!(
            out,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}",
            fmt_num(rect.x),
            fmt_num(rect.y),
            fmt_num(rect.width),
            fmt_num(rect.height),
            fill_attrs(rect.fill)
        );
        if let Some(stroke) = rect.stroke {
            out.push_str(&stroke_attrs(stroke, 1.0));
        }
        out.push_str("/>");
    }
    for line in &layer.lines {
        let _ = write!(
            out,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}/>",
            fmt_num(line.x1),
            fmt_num(line.y1),
            fmt_num(line.x2),
            fmt_num(line.y2),
            stroke_attrs(line.color, line.stroke_width)
        );
    }
    for polyline in &layer.polylines {
        let mut points = String::new();
        for (index, (x, y)) in polyline.points.iter().enumerate() {
            if index > 0 {
                points.push(' ');
            }
            let _ = write!(points, "{},{}", fmt_num(*x), fmt_num(*y));
        }
        let _ = write!(
            out,
            "<polyline points=\"{points}\" fill=\"none\"{}/>",
            stroke_attrs(polyline.color, polyline.stroke_width)
        );
    }
    for text in &layer.texts {
        let anchor = match text.h_align {
            TextHAlign::Left => "start",
            TextHAlign::Center => "middle",
            TextHAlign::Right => "end",
        };
        let _ = write!(
            out,
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"{anchor}\"{}",
            fmt_num(text.x),
            fmt_num(text.y),
            fmt_num(text.font_size_px),
            fill_attrs(text.color)
        );
        if text.rotation_deg != 0.0 {
            let _ = write!(
                out,
                " transform=\"rotate({} {} {})\"",
                fmt_num(text.rotation_deg),
                fmt_num(text.x),
                fmt_num(text.y)
            );
        }
        let _ = write!(out, ">{}</text>", escape_text(&text.text));
    }

    if transformed {
        out.push_str("</g>");
    }
    out.push_str("</g>");
}

fn write_transform_group(out: &mut String, transform: LayerTransform) {
    let _ = write!(
        out,
        "<g transform=\"translate({} {}) scale({})\">",
        fmt_num(transform.translate_x),
        fmt_num(transform.translate_y),
        fmt_num(transform.scale)
    );
}

fn fill_attrs(color: Color) -> String {
    let mut attrs = format!(" fill=\"{}\"", color.to_hex());
    if color.alpha < 1.0 {
        let _ = write!(attrs, " fill-opacity=\"{}\"", fmt_num(color.alpha));
    }
    attrs
}

fn stroke_attrs(color: Color, width: f64) -> String {
    let mut attrs = format!(
        " stroke=\"{}\" stroke-width=\"{}\"",
        color.to_hex(),
        fmt_num(width)
    );
    if color.alpha < 1.0 {
        let _ = write!(attrs, " stroke-opacity=\"{}\"", fmt_num(color.alpha));
    }
    attrs
}

fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{value:.0}");
    }
    let formatted = format!("{value:.3}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_owned()
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
