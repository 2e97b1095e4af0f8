use serde::{Deserialize, Serialize};

use crate::core::scale::SeriesScale;

/// Mapped datapoint in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesVertex {
    pub x: f64,
    pub y: f64,
}

/// Projects every datapoint through `scale`, in series order.
///
/// The function is side-effect free so the stroke and fill shapes are fed
/// from one identical vertex list.
#[must_use]
pub fn project_series(datapoints: &[f64], scale: SeriesScale) -> Vec<SeriesVertex> {
    datapoints
        .iter()
        .enumerate()
        .map(|(index, value)| SeriesVertex {
            x: scale.x_of(index),
            y: scale.y_of(*value),
        })
        .collect()
}
