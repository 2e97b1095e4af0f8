use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{GraphError, GraphResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::rgba(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
            alpha as f64 / 255.0,
        )
    }

    /// Parses `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(input: &str) -> GraphResult<Self> {
        let digits = input
            .strip_prefix('#')
            .filter(|digits| digits.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| invalid_color(input))?;

        let channel = |start: usize, len: usize| -> GraphResult<u8> {
            let raw = u8::from_str_radix(&digits[start..start + len], 16)
                .map_err(|_| invalid_color(input))?;
            Ok(if len == 1 { raw * 17 } else { raw })
        };

        match digits.len() {
            3 => Ok(Self::from_rgba8(channel(0, 1)?, channel(1, 1)?, channel(2, 1)?, 255)),
            4 => Ok(Self::from_rgba8(
                channel(0, 1)?,
                channel(1, 1)?,
                channel(2, 1)?,
                channel(3, 1)?,
            )),
            6 => Ok(Self::from_rgba8(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?, 255)),
            8 => Ok(Self::from_rgba8(
                channel(0, 2)?,
                channel(2, 2)?,
                channel(4, 2)?,
                channel(6, 2)?,
            )),
            _ => Err(invalid_color(input)),
        }
    }

    /// Formats as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        let [red, green, blue, alpha] =
            [self.red, self.green, self.blue, self.alpha].map(channel_to_u8);
        if alpha == u8::MAX {
            format!("#{red:02x}{green:02x}{blue:02x}")
        } else {
            format!("#{red:02x}{green:02x}{blue:02x}{alpha:02x}")
        }
    }

    pub fn validate(self) -> GraphResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(GraphError::InvalidStyle(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn channel_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn invalid_color(input: &str) -> GraphError {
    GraphError::InvalidStyle(format!("unsupported color value `{input}`"))
}

/// Paint applied to a shape's stroke or fill.
///
/// The textual value `"0"` is the transparent sentinel and never reaches a
/// backend as a literal string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Transparent,
    Solid(Color),
}

impl Paint {
    pub const TRANSPARENT_SENTINEL: &'static str = "0";

    pub fn parse(input: &str) -> GraphResult<Self> {
        let trimmed = input.trim();
        if trimmed == Self::TRANSPARENT_SENTINEL || trimmed.eq_ignore_ascii_case("transparent") {
            return Ok(Self::Transparent);
        }
        Color::from_hex(trimmed).map(Self::Solid)
    }

    pub fn validate(self) -> GraphResult<()> {
        match self {
            Self::Transparent => Ok(()),
            Self::Solid(color) => color.validate(),
        }
    }

    #[must_use]
    pub fn is_transparent(self) -> bool {
        match self {
            Self::Transparent => true,
            Self::Solid(color) => color.alpha == 0.0,
        }
    }

    /// Value suitable for a vector-graphics paint attribute.
    #[must_use]
    pub fn to_css(self) -> String {
        match self {
            Self::Transparent => "transparent".to_owned(),
            Self::Solid(color) => color.to_hex(),
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl FromStr for Paint {
    type Err = GraphError;

    fn from_str(input: &str) -> GraphResult<Self> {
        Self::parse(input)
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl Serialize for Paint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Paint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PaintVisitor)
    }
}

struct PaintVisitor;

impl Visitor<'_> for PaintVisitor {
    type Value = Paint;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a hex color string, \"transparent\", or the sentinel 0")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Paint, E> {
        Paint::parse(value).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Paint, E> {
        if value == 0 {
            Ok(Paint::Transparent)
        } else {
            Err(E::custom(format!("unsupported numeric color `{value}`")))
        }
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Paint, E> {
        if value == 0 {
            Ok(Paint::Transparent)
        } else {
            Err(E::custom(format!("unsupported numeric color `{value}`")))
        }
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Paint, E> {
        if value == 0.0 {
            Ok(Paint::Transparent)
        } else {
            Err(E::custom(format!("unsupported numeric color `{value}`")))
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{Color, Paint};

    #[test]
    fn zero_sentinel_becomes_transparent() {
        assert_eq!(Paint::parse("0").expect("sentinel"), Paint::Transparent);
        assert_eq!(Paint::parse("0").expect("sentinel").to_css(), "transparent");
    }

    #[test]
    fn hex_colors_round_trip_through_css() {
        let paint = Paint::parse("#ff699622").expect("rgba hex");
        assert_eq!(paint.to_css(), "#ff699622");
        assert_eq!(Paint::parse("#FF6996").expect("rgb hex").to_css(), "#ff6996");
    }

    #[test]
    fn short_hex_expands_channels() {
        let color = Color::from_hex("#f08").expect("short hex");
        assert_abs_diff_eq!(color.red, 1.0);
        assert_abs_diff_eq!(color.green, 0.0);
        assert_abs_diff_eq!(color.blue, 136.0 / 255.0);
        assert_abs_diff_eq!(color.alpha, 1.0);
    }

    #[test]
    fn unknown_color_syntax_is_rejected() {
        assert!(Paint::parse("rebeccapurple").is_err());
        assert!(Paint::parse("#12345").is_err());
        assert!(Paint::parse("#gg0000").is_err());
        assert!(Paint::parse("#+f+f+f").is_err());
        assert!(Paint::parse("#+fff").is_err());
    }

    #[test]
    fn zero_alpha_solid_counts_as_transparent() {
        assert!(Paint::parse("#ff000000").expect("color").is_transparent());
        assert!(!Paint::parse("#ff0000").expect("color").is_transparent());
        assert!(Paint::Transparent.is_transparent());
    }

    #[test]
    fn numeric_zero_deserializes_as_transparent() {
        let paint: Paint = serde_json::from_str("0").expect("numeric sentinel");
        assert_eq!(paint, Paint::Transparent);
        let paint: Paint = serde_json::from_str("\"0\"").expect("string sentinel");
        assert_eq!(paint, Paint::Transparent);
        assert!(serde_json::from_str::<Paint>("3").is_err());
    }
}
