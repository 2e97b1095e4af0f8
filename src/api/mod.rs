mod data_controller;
mod engine;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod geometry;
mod interaction_controller;
mod style_controller;
mod validation;

pub use engine::LineGraph;
pub use engine_config::{
    DEFAULT_FILL_COLOR, DEFAULT_LINE_COLOR, DEFAULT_STROKE_COLOR, GraphStyle, GraphStylePatch,
    LineGraphConfig,
};
pub use engine_init::{FILL_CLASS, OVERLAY_CLASS, STROKE_CLASS};
pub use engine_snapshot::{
    GRAPH_SNAPSHOT_JSON_SCHEMA_V1, GraphSnapshot, GraphSnapshotJsonContractV1,
};
