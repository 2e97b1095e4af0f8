use crate::error::{GraphError, GraphResult};

use super::GraphStyle;

pub(super) fn validate_style(style: GraphStyle) -> GraphResult<GraphStyle> {
    if !style.padding.is_finite() || style.padding <= 0.0 || style.padding > 1.0 {
        return Err(GraphError::InvalidStyle(
            "padding must be finite and in (0, 1]".to_owned(),
        ));
    }
    for (name, value) in [
        ("stroke_width", style.stroke_width),
        ("line_size", style.line_size),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(GraphError::InvalidStyle(format!(
                "`{name}` must be finite and >= 0"
            )));
        }
    }
    style.line_color.validate()?;
    style.stroke_color.validate()?;
    style.fill_color.validate()?;
    Ok(style)
}
