use std::fmt::{self, Write};

use tracing::trace;

use crate::error::{GraphError, GraphResult};
use crate::render::{RenderFrame, Renderer, ShapeFrame};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const CONTAINER_CLASS: &str = "graph";

/// Renderer producing embeddable SVG markup.
///
/// The output is one pixel-sized container holding a fixed-size `svg`
/// surface whose single `g` group carries the padding transform.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    markup: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup of the last rendered frame, empty after `detach`.
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()> {
        frame.validate()?;
        self.markup = render_svg_markup(frame)?;
        trace!(bytes = self.markup.len(), "svg frame rendered");
        Ok(())
    }

    fn detach(&mut self) -> GraphResult<()> {
        self.markup.clear();
        Ok(())
    }
}

/// Serializes `frame` into container + surface markup.
pub fn render_svg_markup(frame: &RenderFrame) -> GraphResult<String> {
    let mut out = String::new();
    write_frame(&mut out, frame).map_err(|e| GraphError::Render(e.to_string()))?;
    Ok(out)
}

fn write_frame(out: &mut String, frame: &RenderFrame) -> fmt::Result {
    let width = frame.size.width;
    let height = frame.size.height;

    write!(
        out,
        r#"<div class="{CONTAINER_CLASS}" style="width: {width}px; height: {height}px;">"#
    )?;
    write!(
        out,
        r#"<svg xmlns="{SVG_NAMESPACE}" viewBox="0 0 {width} {height}" width="{width}" height="{height}">"#
    )?;
    match frame.transform {
        Some(transform) => write!(
            out,
            r#"<g transform="scale({})" transform-origin="{}px {}px">"#,
            transform.scale, transform.origin_x, transform.origin_y
        )?,
        None => out.write_str("<g>")?,
    }
    for shape in &frame.shapes {
        write_shape(out, shape)?;
    }
    out.write_str("</g></svg></div>")
}

fn write_shape(out: &mut String, shape: &ShapeFrame) -> fmt::Result {
    out.write_str("<path")?;
    if let Some(class_name) = &shape.class_name {
        write!(out, r#" class="{}""#, escape_attr(class_name))?;
    }
    write!(out, r#" d="{}""#, shape.path)?;
    if let Some(stroke) = shape.stroke {
        write!(out, r#" stroke="{stroke}""#)?;
    }
    if let Some(width) = shape.stroke_width {
        write!(out, r#" stroke-width="{width}""#)?;
    }
    if let Some(fill) = shape.fill {
        write!(out, r#" fill="{fill}""#)?;
    }
    for (name, value) in &shape.attributes {
        write!(out, r#" {}="{}""#, escape_attr(name), escape_attr(value))?;
    }
    out.write_str("/>")
}

fn escape_attr(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
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
