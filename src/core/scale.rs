use crate::core::types::{SurfaceSize, ValueRange};

/// Position of `value` inside `[min, max]` as a fraction.
#[must_use]
pub fn inverse_lerp(min: f64, max: f64, value: f64) -> f64 {
    (value - min) / (max - min)
}

/// Rounds `value` to the nearest multiple of `factor`.
#[must_use]
pub fn snap(value: f64, factor: f64) -> f64 {
    (value / factor).round() * factor
}

/// Index/value to pixel mapping for one series on one surface.
///
/// The y axis is flipped: `range.max()` lands on row 0 (visual top) and
/// `range.min()` on `height`. A one-point series divides by zero on the x
/// axis and maps to NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesScale {
    range: ValueRange,
    width: f64,
    height: f64,
    last_index: f64,
}

impl SeriesScale {
    #[must_use]
    pub fn new(range: ValueRange, size: SurfaceSize, len: usize) -> Self {
        Self {
            range,
            width: size.width_px(),
            height: size.height_px(),
            last_index: len.saturating_sub(1) as f64,
        }
    }

    #[must_use]
    pub fn range(self) -> ValueRange {
        self.range
    }

    #[must_use]
    pub fn x_of(self, index: usize) -> f64 {
        index as f64 / self.last_index * self.width
    }

    #[must_use]
    pub fn y_of(self, value: f64) -> f64 {
        self.height - inverse_lerp(self.range.min(), self.range.max(), value) * self.height
    }
}
