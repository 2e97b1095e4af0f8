use serde::{Deserialize, Serialize};

use crate::core::{SurfaceSize, ValueRange};
use crate::error::{GraphError, GraphResult};
use crate::interaction::HoverState;
use crate::render::Renderer;

use super::{GraphStyle, LineGraph};

pub const GRAPH_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub size: SurfaceSize,
    pub minmax: ValueRange,
    pub minmax_pinned: bool,
    pub style: GraphStyle,
    pub datapoints: Vec<f64>,
    pub state: HoverState,
    pub stroke_path: String,
    pub fill_path: String,
    pub overlay_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: GraphSnapshot,
}

impl GraphSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> GraphResult<String> {
        let payload = GraphSnapshotJsonContractV1 {
            schema_version: GRAPH_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            GraphError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> GraphResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<GraphSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: GraphSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            GraphError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != GRAPH_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(GraphError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> LineGraph<R> {
    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            size: self.size,
            minmax: self.minmax,
            minmax_pinned: self.minmax_pinned,
            style: self.style,
            datapoints: self.datapoints.clone(),
            state: self.hover.state(),
            stroke_path: self.stroke_path().to_owned(),
            fill_path: self.fill_path().to_owned(),
            overlay_path: self.overlay_path().to_owned(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| GraphError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> GraphResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
