mod canvas;
mod frame;
mod null_renderer;
mod path;
mod primitives;
mod svg_renderer;

pub use canvas::{Canvas, GroupTransform, ShapeId};
pub use frame::{RenderFrame, ShapeFrame};
pub use null_renderer::NullRenderer;
pub use path::{CommandKind, DrawingCommand, PathBuilder};
pub use primitives::{Color, Paint};
pub use svg_renderer::{SvgRenderer, render_svg_markup};

use crate::error::GraphResult;

/// Contract implemented by any host canvas adapter.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from graph geometry and pointer handling.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()>;

    /// Removes the surface from the host. Called once on disposal.
    fn detach(&mut self) -> GraphResult<()> {
        Ok(())
    }
}
