//! line-graph: interactive line/area graph engine.
//!
//! The crate maps a numeric series onto vector path descriptions, layers
//! them on a padded canvas and translates pointer positions back into the
//! nearest sample. Rendering backends consume a host-agnostic
//! [`render::RenderFrame`], so the engine runs headless in tests.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{GraphStyle, GraphStylePatch, LineGraph, LineGraphConfig};
pub use error::{GraphError, GraphResult};
