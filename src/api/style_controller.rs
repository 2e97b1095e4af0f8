use tracing::debug;

use crate::core::SurfaceSize;
use crate::error::GraphResult;
use crate::render::Renderer;

use super::validation::validate_style;
use super::{GraphStylePatch, LineGraph};

impl<R: Renderer> LineGraph<R> {
    /// Merges `patch` over the current style, field by field.
    ///
    /// An invalid merged style is rejected and leaves the graph untouched.
    /// A hover marker on screen is redrawn with the new style.
    pub fn restyle(&mut self, patch: GraphStylePatch) -> GraphResult<()> {
        let style = validate_style(self.style.merged(patch))?;
        self.style = style;
        debug!(
            padding = style.padding,
            stroke_width = style.stroke_width,
            line_size = style.line_size,
            "restyle"
        );
        self.apply_style();
        self.refresh_overlay();
        Ok(())
    }

    /// Resizes the surface and rebuilds every path.
    pub fn resize(&mut self, width: u32, height: u32) -> GraphResult<()> {
        let size = SurfaceSize::new(width, height).validate()?;
        self.size = size;
        self.canvas.set_size(size);
        self.apply_padding();
        debug!(width, height, "resize");
        self.update();
        Ok(())
    }

    /// Pushes padding and paints from the style to the canvas and shapes.
    pub(super) fn apply_style(&mut self) {
        self.apply_padding();

        let style = self.style;
        self.canvas[self.shapes.stroke]
            .stroke(style.stroke_color)
            .stroke_width(style.stroke_width);
        self.canvas[self.shapes.fill].fill(style.fill_color);
        self.canvas[self.shapes.overlay].fill(style.line_color);
    }

    /// Scale origin sits at the center of the padded content box.
    pub(super) fn apply_padding(&mut self) {
        let padding = self.style.padding;
        let origin_x = self.size.width_px() * padding * 0.5;
        let origin_y = self.size.height_px() * padding * 0.5;
        self.canvas.set_padding(padding, origin_x, origin_y);
    }
}
