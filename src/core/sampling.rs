use serde::{Deserialize, Serialize};

use crate::core::scale::snap;

/// Result of mapping a pointer offset back onto the datapoint grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    /// Snapped x position of the marker, in unscaled surface pixels.
    pub x: f64,
    /// Nearest datapoint index, always within `0..len`.
    pub index: usize,
    /// Pointer position re-expanded for padding, before clamping.
    pub offset: f64,
}

/// Maps `offset_x` (reported in the unscaled surface box) to the nearest
/// datapoint of a `len`-point series drawn on a `width`-wide surface.
///
/// Content is shrunk by `padding` around the surface center, so the offset is
/// re-centered by `0.5 - padding / 2` and divided by `padding` before it is
/// compared against the index grid. The returned `offset` is left unclamped
/// and may fall outside `[0, 1]` at the edges.
#[must_use]
pub fn sample_pointer(offset_x: f64, width: f64, padding: f64, len: usize) -> PointerSample {
    let last_index = len.saturating_sub(1) as f64;
    let factor = width / last_index;

    let small_offset = 0.5 - padding / 2.0;
    let offset = (offset_x / width - small_offset) / padding;
    let sampled_offset = offset.clamp(0.0, 1.0) * width;

    let x = snap(sampled_offset, factor).floor();
    let index = (sampled_offset / width * last_index).round();

    PointerSample {
        x,
        index: index_from_f64(index, len),
        offset,
    }
}

fn index_from_f64(index: f64, len: usize) -> usize {
    if !index.is_finite() || index <= 0.0 {
        return 0;
    }
    (index as usize).min(len.saturating_sub(1))
}
