use tracing::debug;

use crate::core::{ValueRange, validate_datapoints};
use crate::error::GraphResult;
use crate::render::Renderer;

use super::LineGraph;

impl<R: Renderer> LineGraph<R> {
    /// Replaces the datapoint series and rebuilds every path.
    ///
    /// The value range is re-derived unless it was pinned by the caller.
    pub fn set_datapoints(&mut self, datapoints: Vec<f64>) -> GraphResult<()> {
        validate_datapoints(&datapoints)?;
        if !self.minmax_pinned {
            self.minmax = ValueRange::from_datapoints(&datapoints)?;
        }
        self.datapoints = datapoints;
        debug!(
            count = self.datapoints.len(),
            min = self.minmax.min(),
            max = self.minmax.max(),
            "set datapoints"
        );
        self.update();
        Ok(())
    }

    /// Pins the value range, or unpins it with `None` and re-derives it.
    ///
    /// A pinned range is used as given and is not checked against the data.
    pub fn set_minmax(&mut self, range: Option<ValueRange>) -> GraphResult<()> {
        match range {
            Some(range) => {
                self.minmax = ValueRange::new(range.min(), range.max())?;
                self.minmax_pinned = true;
            }
            None => {
                self.minmax = ValueRange::from_datapoints(&self.datapoints)?;
                self.minmax_pinned = false;
            }
        }
        debug!(
            min = self.minmax.min(),
            max = self.minmax.max(),
            pinned = self.minmax_pinned,
            "set minmax"
        );
        self.update();
        Ok(())
    }

    /// Re-derives the range from the current datapoints and unpins it.
    pub fn compute_minmax(&mut self) -> GraphResult<ValueRange> {
        self.set_minmax(None)?;
        Ok(self.minmax)
    }
}
