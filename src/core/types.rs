use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Fixed pixel box of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const DEFAULT_WIDTH: u32 = 200;
    pub const DEFAULT_HEIGHT: u32 = 200;

    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> GraphResult<Self> {
        if !self.is_valid() {
            return Err(GraphError::InvalidSurface {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

/// Values mapped to the bottom (`min`) and top (`max`) of the surface.
///
/// Serialized as a `[min, max]` pair. `min == max` is accepted and makes
/// every mapped y coordinate NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct ValueRange {
    min: f64,
    max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> GraphResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(GraphError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Derives `(minimum, maximum)` over the series with a linear scan.
    pub fn from_datapoints(datapoints: &[f64]) -> GraphResult<Self> {
        let (first, rest) = datapoints.split_first().ok_or(GraphError::EmptySeries)?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), value| {
                (min.min(*value), max.max(*value))
            });
        Self::new(min, max)
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.min == self.max
    }
}

impl TryFrom<(f64, f64)> for ValueRange {
    type Error = GraphError;

    fn try_from((min, max): (f64, f64)) -> GraphResult<Self> {
        Self::new(min, max)
    }
}

impl From<ValueRange> for (f64, f64) {
    fn from(range: ValueRange) -> Self {
        (range.min, range.max)
    }
}

/// Checks the datapoint series contract: non-empty and finite.
pub fn validate_datapoints(datapoints: &[f64]) -> GraphResult<()> {
    if datapoints.is_empty() {
        return Err(GraphError::EmptySeries);
    }
    if let Some(index) = datapoints.iter().position(|value| !value.is_finite()) {
        return Err(GraphError::InvalidData(format!(
            "datapoint at index {index} must be finite"
        )));
    }
    Ok(())
}
