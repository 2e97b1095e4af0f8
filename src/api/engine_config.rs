use serde::{Deserialize, Serialize};

use crate::core::{SurfaceSize, ValueRange};
use crate::error::{GraphError, GraphResult};
use crate::render::{Color, Paint};

pub const DEFAULT_LINE_COLOR: Color = Color::from_rgba8(0xff, 0x69, 0x96, 0xff);
pub const DEFAULT_STROKE_COLOR: Color = Color::from_rgba8(0xff, 0x69, 0x96, 0xff);
pub const DEFAULT_FILL_COLOR: Color = Color::from_rgba8(0xff, 0x69, 0x96, 0x22);

/// Visual knobs of a graph.
///
/// Every field is defaulted on its own, so a partial style object keeps the
/// defaults of the fields it omits. Camel-case keys are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphStyle {
    /// Uniform shrink factor in `(0, 1]`; `1` means no padding.
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default = "default_stroke_width", alias = "strokeWidth")]
    pub stroke_width: f64,
    /// Thickness of the hover marker.
    #[serde(default = "default_line_size", alias = "lineSize")]
    pub line_size: f64,
    #[serde(default = "default_line_color", alias = "lineColor")]
    pub line_color: Paint,
    #[serde(default = "default_stroke_color", alias = "strokeColor")]
    pub stroke_color: Paint,
    #[serde(default = "default_fill_color", alias = "fillColor")]
    pub fill_color: Paint,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            padding: default_padding(),
            stroke_width: default_stroke_width(),
            line_size: default_line_size(),
            line_color: default_line_color(),
            stroke_color: default_stroke_color(),
            fill_color: default_fill_color(),
        }
    }
}

impl GraphStyle {
    /// Returns a copy with every field set in `patch` replaced.
    #[must_use]
    pub fn merged(self, patch: GraphStylePatch) -> Self {
        Self {
            padding: patch.padding.unwrap_or(self.padding),
            stroke_width: patch.stroke_width.unwrap_or(self.stroke_width),
            line_size: patch.line_size.unwrap_or(self.line_size),
            line_color: patch.line_color.unwrap_or(self.line_color),
            stroke_color: patch.stroke_color.unwrap_or(self.stroke_color),
            fill_color: patch.fill_color.unwrap_or(self.fill_color),
        }
    }
}

/// Partial style merged field-by-field by `LineGraph::restyle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphStylePatch {
    #[serde(default)]
    pub padding: Option<f64>,
    #[serde(default, alias = "strokeWidth")]
    pub stroke_width: Option<f64>,
    #[serde(default, alias = "lineSize")]
    pub line_size: Option<f64>,
    #[serde(default, alias = "lineColor")]
    pub line_color: Option<Paint>,
    #[serde(default, alias = "strokeColor")]
    pub stroke_color: Option<Paint>,
    #[serde(default, alias = "fillColor")]
    pub fill_color: Option<Paint>,
}

impl GraphStylePatch {
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = Some(padding);
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = Some(stroke_width);
        self
    }

    #[must_use]
    pub fn with_line_size(mut self, line_size: f64) -> Self {
        self.line_size = Some(line_size);
        self
    }

    #[must_use]
    pub fn with_line_color(mut self, paint: Paint) -> Self {
        self.line_color = Some(paint);
        self
    }

    #[must_use]
    pub fn with_stroke_color(mut self, paint: Paint) -> Self {
        self.stroke_color = Some(paint);
        self
    }

    #[must_use]
    pub fn with_fill_color(mut self, paint: Paint) -> Self {
        self.fill_color = Some(paint);
        self
    }
}

/// Public graph bootstrap configuration.
///
/// Serializable so hosts can ship graph setup as JSON. Callbacks are not
/// part of it; they are registered on the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineGraphConfig {
    pub datapoints: Vec<f64>,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Explicit value range. Derived from the datapoints when absent.
    #[serde(default)]
    pub minmax: Option<ValueRange>,
    #[serde(default)]
    pub style: GraphStyle,
}

impl LineGraphConfig {
    /// Creates a config with default size and style and an auto range.
    #[must_use]
    pub fn new(datapoints: Vec<f64>) -> Self {
        Self {
            datapoints,
            width: default_width(),
            height: default_height(),
            minmax: None,
            style: GraphStyle::default(),
        }
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Pins the value range instead of deriving it from the datapoints.
    #[must_use]
    pub fn with_minmax(mut self, range: ValueRange) -> Self {
        self.minmax = Some(range);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: GraphStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn surface_size(&self) -> SurfaceSize {
        SurfaceSize::new(self.width, self.height)
    }

    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| GraphError::InvalidData(format!("failed to parse graph config: {e}")))
    }

    pub fn to_json_pretty(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GraphError::InvalidData(format!("failed to serialize graph config: {e}")))
    }
}

fn default_width() -> u32 {
    SurfaceSize::DEFAULT_WIDTH
}

fn default_height() -> u32 {
    SurfaceSize::DEFAULT_HEIGHT
}

fn default_padding() -> f64 {
    1.0
}

fn default_stroke_width() -> f64 {
    1.0
}

fn default_line_size() -> f64 {
    1.0
}

fn default_line_color() -> Paint {
    Paint::Solid(DEFAULT_LINE_COLOR)
}

fn default_stroke_color() -> Paint {
    Paint::Solid(DEFAULT_STROKE_COLOR)
}

fn default_fill_color() -> Paint {
    Paint::Solid(DEFAULT_FILL_COLOR)
}

#[cfg(test)]
mod tests {
    use super::{GraphStyle, GraphStylePatch, LineGraphConfig};
    use crate::render::Paint;

    #[test]
    fn partial_style_keeps_field_defaults() {
        let config = LineGraphConfig::from_json_str(
            r#"{"datapoints": [1, 2, 3], "style": {"padding": 0.5, "fillColor": "0"}}"#,
        )
        .expect("config");
        assert_eq!(config.width, 200);
        assert_eq!(config.height, 200);
        assert!(config.minmax.is_none());
        assert_eq!(config.style.padding, 0.5);
        assert_eq!(config.style.fill_color, Paint::Transparent);
        assert_eq!(config.style.stroke_width, 1.0);
        assert_eq!(config.style.line_color.to_css(), "#ff6996");
    }

    #[test]
    fn missing_datapoints_is_a_parse_error() {
        assert!(LineGraphConfig::from_json_str(r#"{"width": 10}"#).is_err());
    }

    #[test]
    fn patch_overrides_only_set_fields() {
        let style = GraphStyle::default().merged(
            GraphStylePatch::default()
                .with_stroke_width(3.0)
                .with_fill_color(Paint::Transparent),
        );
        assert_eq!(style.stroke_width, 3.0);
        assert_eq!(style.fill_color, Paint::Transparent);
        assert_eq!(style.padding, 1.0);
        assert_eq!(style.stroke_color.to_css(), "#ff6996");
    }

    #[test]
    fn default_fill_is_translucent() {
        assert_eq!(GraphStyle::default().fill_color.to_css(), "#ff699622");
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = LineGraphConfig::new(vec![1.0, 4.0]).with_size(320, 90);
        let json = config.to_json_pretty().expect("json");
        let parsed = LineGraphConfig::from_json_str(&json).expect("parse");
        assert_eq!(parsed, config);
    }
}
