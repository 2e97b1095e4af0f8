use tracing::trace;

use crate::core::{PointerSample, sample_pointer};
use crate::interaction::HoverSample;
use crate::render::Renderer;

use super::LineGraph;

impl<R: Renderer> LineGraph<R> {
    fn resolve_pointer(&self, offset_x: f64) -> PointerSample {
        sample_pointer(
            offset_x,
            self.size.width_px(),
            self.style.padding,
            self.datapoints.len(),
        )
    }

    fn hover_sample(&self, pointer: PointerSample) -> HoverSample {
        HoverSample {
            value: self
                .datapoints
                .get(pointer.index)
                .copied()
                .unwrap_or(f64::NAN),
            offset: pointer.offset,
            index: pointer.index,
        }
    }

    /// Resolves the datapoint nearest to `offset_x` without touching state.
    ///
    /// `offset_x` is measured in the unscaled surface box, the way pointer
    /// events report it.
    #[must_use]
    pub fn sample_at(&self, offset_x: f64) -> HoverSample {
        self.hover_sample(self.resolve_pointer(offset_x))
    }

    /// Samples `offset_x` and redraws the overlay marker there.
    pub fn update_contextual_line(&mut self, offset_x: f64) -> HoverSample {
        let pointer = self.resolve_pointer(offset_x);
        let y = self.y_of(pointer.index);
        self.draw_overlay(pointer.x, y);
        self.hover_sample(pointer)
    }

    /// Pointer entered the surface. Always reports the sample.
    pub fn pointer_enter(&mut self, offset_x: f64) -> HoverSample {
        let sample = self.update_contextual_line(offset_x);
        trace!(offset_x, index = sample.index, "pointer enter");
        if self.hover.on_pointer_enter(offset_x, sample.index) {
            self.callbacks.emit_value(sample);
        }
        sample
    }

    /// Pointer moved over the surface.
    ///
    /// The overlay is always redrawn; the value callback only fires when the
    /// nearest index changed since the last report.
    pub fn pointer_move(&mut self, offset_x: f64) -> HoverSample {
        let sample = self.update_contextual_line(offset_x);
        if self.hover.on_pointer_move(offset_x, sample.index) {
            trace!(offset_x, index = sample.index, "pointer move");
            self.callbacks.emit_value(sample);
        } else {
            trace!(offset_x, index = sample.index, "pointer move suppressed");
        }
        sample
    }

    /// Pointer left the surface: clears the overlay and fires the cancel callback.
    pub fn pointer_leave(&mut self) {
        self.canvas[self.shapes.overlay].clear();
        self.hover.on_pointer_leave();
        trace!("pointer leave");
        self.callbacks.emit_cancel();
    }
}
