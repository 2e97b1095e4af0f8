use serde::{Deserialize, Serialize};

use crate::core::SurfaceSize;
use crate::error::{GraphError, GraphResult};
use crate::render::{GroupTransform, Paint, PathBuilder};

/// Materialized shape: path description plus paint attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeFrame {
    pub class_name: Option<String>,
    pub path: String,
    pub stroke: Option<Paint>,
    pub fill: Option<Paint>,
    pub stroke_width: Option<f64>,
    pub attributes: Vec<(String, String)>,
}

impl ShapeFrame {
    #[must_use]
    pub fn from_path(path: &PathBuilder) -> Self {
        Self {
            class_name: path.class_name().map(str::to_owned),
            path: path.path_data().to_owned(),
            stroke: path.stroke_paint(),
            fill: path.fill_paint(),
            stroke_width: path.stroke_width_value(),
            attributes: path.attributes().to_vec(),
        }
    }

    pub fn validate(&self) -> GraphResult<()> {
        if let Some(width) = self.stroke_width {
            if !width.is_finite() || width < 0.0 {
                return Err(GraphError::InvalidStyle(
                    "stroke width must be finite and >= 0".to_owned(),
                ));
            }
        }
        if let Some(paint) = self.stroke {
            paint.validate()?;
        }
        if let Some(paint) = self.fill {
            paint.validate()?;
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one draw pass.
///
/// Path coordinates are not validated: degenerate series legitimately carry
/// NaN coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub size: SurfaceSize,
    pub transform: Option<GroupTransform>,
    pub shapes: Vec<ShapeFrame>,
}

impl RenderFrame {
    pub fn validate(&self) -> GraphResult<()> {
        self.size.validate()?;
        if let Some(transform) = self.transform {
            if !transform.scale.is_finite() {
                return Err(GraphError::InvalidStyle(
                    "group scale must be finite".to_owned(),
                ));
            }
        }
        for shape in &self.shapes {
            shape.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.iter().all(|shape| shape.path.is_empty())
    }
}
