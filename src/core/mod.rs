pub mod sampling;
pub mod scale;
pub mod series;
pub mod types;

pub use sampling::{PointerSample, sample_pointer};
pub use scale::{SeriesScale, inverse_lerp, snap};
pub use series::{SeriesVertex, project_series};
pub use types::{SurfaceSize, ValueRange, validate_datapoints};
