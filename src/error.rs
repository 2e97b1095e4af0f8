use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid surface size: width={width}, height={height}")]
    InvalidSurface { width: u32, height: u32 },

    #[error("datapoint series must not be empty")]
    EmptySeries,

    #[error("invalid value range: min={min}, max={max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid style: {0}")]
    InvalidStyle(String),

    #[error("render failed: {0}")]
    Render(String),
}
