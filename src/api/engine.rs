use tracing::debug;

use crate::core::{SurfaceSize, ValueRange};
use crate::error::GraphResult;
use crate::interaction::{HoverCallbacks, HoverSample, HoverState, HoverTracker};
use crate::render::{Canvas, PathBuilder, RenderFrame, Renderer, ShapeId};

use super::GraphStyle;

/// Handles of the three shapes a graph owns, in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct GraphShapes {
    pub stroke: ShapeId,
    pub fill: ShapeId,
    pub overlay: ShapeId,
}

/// Interactive line/area graph.
///
/// `LineGraph` owns the datapoint series, the value range, the style and a
/// canvas holding the stroke, fill and hover-overlay paths. Hosts forward
/// pointer events and call [`LineGraph::render`] to push a frame to `R`.
pub struct LineGraph<R: Renderer> {
    pub(super) renderer: R,
    pub(super) datapoints: Vec<f64>,
    pub(super) minmax: ValueRange,
    pub(super) minmax_pinned: bool,
    pub(super) style: GraphStyle,
    pub(super) size: SurfaceSize,
    pub(super) canvas: Canvas,
    pub(super) shapes: GraphShapes,
    pub(super) hover: HoverTracker,
    pub(super) callbacks: HoverCallbacks,
}

impl<R: Renderer> LineGraph<R> {
    #[must_use]
    pub fn datapoints(&self) -> &[f64] {
        &self.datapoints
    }

    #[must_use]
    pub fn minmax(&self) -> ValueRange {
        self.minmax
    }

    /// Whether the range was supplied by the caller rather than derived.
    #[must_use]
    pub fn is_minmax_pinned(&self) -> bool {
        self.minmax_pinned
    }

    #[must_use]
    pub fn style(&self) -> GraphStyle {
        self.style
    }

    #[must_use]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    #[must_use]
    pub fn state(&self) -> HoverState {
        self.hover.state()
    }

    #[must_use]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    #[must_use]
    pub fn stroke_shape(&self) -> &PathBuilder {
        &self.canvas[self.shapes.stroke]
    }

    #[must_use]
    pub fn fill_shape(&self) -> &PathBuilder {
        &self.canvas[self.shapes.fill]
    }

    #[must_use]
    pub fn overlay_shape(&self) -> &PathBuilder {
        &self.canvas[self.shapes.overlay]
    }

    #[must_use]
    pub fn stroke_path(&self) -> &str {
        self.stroke_shape().path_data()
    }

    #[must_use]
    pub fn fill_path(&self) -> &str {
        self.fill_shape().path_data()
    }

    #[must_use]
    pub fn overlay_path(&self) -> &str {
        self.overlay_shape().path_data()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn set_on_value(&mut self, callback: impl FnMut(HoverSample) + 'static) {
        self.callbacks.set_on_value(callback);
    }

    pub fn set_on_cancel(&mut self, callback: impl FnMut() + 'static) {
        self.callbacks.set_on_cancel(callback);
    }

    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        self.canvas.frame()
    }

    pub fn render(&mut self) -> GraphResult<()> {
        let frame = self.canvas.frame();
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Drops the callbacks, clears the overlay and detaches the surface from
    /// the host, handing the renderer back.
    pub fn dispose(mut self) -> GraphResult<R> {
        self.callbacks.clear();
        self.canvas[self.shapes.overlay].clear();
        self.hover.on_pointer_leave();
        self.renderer.detach()?;
        debug!(points = self.datapoints.len(), "line graph disposed");
        Ok(self.renderer)
    }
}
