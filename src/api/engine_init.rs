use tracing::debug;

use crate::core::{ValueRange, validate_datapoints};
use crate::error::GraphResult;
use crate::interaction::{HoverCallbacks, HoverSample, HoverTracker};
use crate::render::{Canvas, Paint, PathBuilder, Renderer};

use super::validation::validate_style;
use super::{LineGraph, LineGraphConfig, engine::GraphShapes};

pub const STROKE_CLASS: &str = "graphStroke";
pub const FILL_CLASS: &str = "graphFill";
pub const OVERLAY_CLASS: &str = "graphLine";

impl<R: Renderer> LineGraph<R> {
    /// Creates a graph and builds its stroke and fill geometry.
    ///
    /// The config is consumed, so later edits on the caller side never leak
    /// into the graph.
    pub fn new(renderer: R, config: LineGraphConfig) -> GraphResult<Self> {
        let size = config.surface_size().validate()?;
        validate_datapoints(&config.datapoints)?;
        let style = validate_style(config.style)?;

        let (minmax, minmax_pinned) = match config.minmax {
            Some(range) => (ValueRange::new(range.min(), range.max())?, true),
            None => (ValueRange::from_datapoints(&config.datapoints)?, false),
        };

        let mut canvas = Canvas::new(size);
        let mut stroke = PathBuilder::new().with_class(STROKE_CLASS);
        stroke.fill(Paint::Transparent);
        let mut fill = PathBuilder::new().with_class(FILL_CLASS);
        fill.fill(Paint::Transparent);
        let overlay = PathBuilder::new().with_class(OVERLAY_CLASS);

        let shapes = GraphShapes {
            stroke: canvas.add(stroke),
            fill: canvas.add(fill),
            overlay: canvas.add(overlay),
        };

        let mut graph = Self {
            renderer,
            datapoints: config.datapoints,
            minmax,
            minmax_pinned,
            style,
            size,
            canvas,
            shapes,
            hover: HoverTracker::default(),
            callbacks: HoverCallbacks::default(),
        };

        graph.apply_style();
        graph.update();
        graph.hover.mark_ready();

        debug!(
            points = graph.datapoints.len(),
            width = size.width,
            height = size.height,
            min = minmax.min(),
            max = minmax.max(),
            minmax_pinned,
            "line graph created"
        );
        Ok(graph)
    }

    /// Creates a graph with hover callbacks already registered.
    pub fn with_callbacks(
        renderer: R,
        config: LineGraphConfig,
        on_value: impl FnMut(HoverSample) + 'static,
        on_cancel: impl FnMut() + 'static,
    ) -> GraphResult<Self> {
        let mut graph = Self::new(renderer, config)?;
        graph.set_on_value(on_value);
        graph.set_on_cancel(on_cancel);
        Ok(graph)
    }
}
