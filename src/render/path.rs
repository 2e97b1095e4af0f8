use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::render::Paint;

/// Vector path command, named after its lower-case (relative) letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandKind {
    MoveTo,
    LineTo,
    LineToHorizontal,
    LineToVertical,
    Cubic,
    SmoothCubic,
    Quadratic,
    SmoothQuadratic,
    Arc,
    Close,
}

impl CommandKind {
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::MoveTo => 'm',
            Self::LineTo => 'l',
            Self::LineToHorizontal => 'h',
            Self::LineToVertical => 'v',
            Self::Cubic => 'c',
            Self::SmoothCubic => 's',
            Self::Quadratic => 'q',
            Self::SmoothQuadratic => 't',
            Self::Arc => 'a',
            Self::Close => 'z',
        }
    }
}

/// One appended path command with its resolved coordinate mode.
///
/// Arc parameters are stored as
/// `[rx, ry, x_axis_rotation, large_arc, sweep, x, y]` with the flags as
/// `0.0`/`1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingCommand {
    pub kind: CommandKind,
    pub params: SmallVec<[f64; 7]>,
    pub relative: bool,
}

impl DrawingCommand {
    #[must_use]
    pub fn letter(&self) -> char {
        if self.relative {
            self.kind.letter()
        } else {
            self.kind.letter().to_ascii_uppercase()
        }
    }
}

impl fmt::Display for DrawingCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())?;
        // Arc flags print as one `large,sweep` token.
        if self.kind == CommandKind::Arc && self.params.len() == 7 {
            let p = &self.params;
            return write!(
                f,
                " {} {} {} {},{} {} {}",
                PathNumber(p[0]),
                PathNumber(p[1]),
                PathNumber(p[2]),
                PathNumber(p[3]),
                PathNumber(p[4]),
                PathNumber(p[5]),
                PathNumber(p[6]),
            );
        }
        for param in &self.params {
            write!(f, " {}", PathNumber(*param))?;
        }
        Ok(())
    }
}

/// Shortest round-trip number formatting with `-0` printed as `0`.
struct PathNumber(f64);

impl fmt::Display for PathNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value == 0.0 {
            f.write_str("0")
        } else if value == f64::INFINITY {
            f.write_str("Infinity")
        } else if value == f64::NEG_INFINITY {
            f.write_str("-Infinity")
        } else {
            write!(f, "{value}")
        }
    }
}

/// Incremental vector path plus the paint attributes of its shape.
///
/// Every append is serialized immediately into [`PathBuilder::path_data`].
/// Paint attributes survive [`PathBuilder::clear`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathBuilder {
    commands: Vec<DrawingCommand>,
    data: String,
    absolute_forced: bool,
    stroke: Option<Paint>,
    fill: Option<Paint>,
    stroke_width: Option<f64>,
    class_name: Option<String>,
    attributes: Vec<(String, String)>,
}

impl PathBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawingCommand] {
        &self.commands
    }

    #[must_use]
    pub fn path_data(&self) -> &str {
        &self.data
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn is_absolute_forced(&self) -> bool {
        self.absolute_forced
    }

    #[must_use]
    pub fn stroke_paint(&self) -> Option<Paint> {
        self.stroke
    }

    #[must_use]
    pub fn fill_paint(&self) -> Option<Paint> {
        self.fill
    }

    #[must_use]
    pub fn stroke_width_value(&self) -> Option<f64> {
        self.stroke_width
    }

    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn clear(&mut self) -> &mut Self {
        self.commands.clear();
        self.data.clear();
        self
    }

    /// While set, every appended command is emitted in absolute form.
    pub fn force_absolute(&mut self, forced: bool) -> &mut Self {
        self.absolute_forced = forced;
        self
    }

    pub fn stroke(&mut self, paint: Paint) -> &mut Self {
        self.stroke = Some(paint);
        self
    }

    pub fn stroke_width(&mut self, width: f64) -> &mut Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn fill(&mut self, paint: Paint) -> &mut Self {
        self.fill = Some(paint);
        self
    }

    /// Sets an extra presentation attribute, replacing a previous value.
    pub fn attr(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    fn command(&mut self, kind: CommandKind, relative: bool, params: &[f64]) -> &mut Self {
        let command = DrawingCommand {
            kind,
            params: SmallVec::from_slice(params),
            relative: relative && !self.absolute_forced,
        };
        if !self.data.is_empty() {
            self.data.push(' ');
        }
        self.data.push_str(&command.to_string());
        self.commands.push(command);
        self
    }

    /// Closes the current subpath. Always absolute.
    pub fn close(&mut self) -> &mut Self {
        self.command(CommandKind::Close, false, &[])
    }

    pub fn move_to(&mut self, x: f64, y: f64, relative: bool) -> &mut Self {
        self.command(CommandKind::MoveTo, relative, &[x, y])
    }

    pub fn line_to(&mut self, x: f64, y: f64, relative: bool) -> &mut Self {
        self.command(CommandKind::LineTo, relative, &[x, y])
    }

    pub fn line_to_horizontal(&mut self, x: f64, relative: bool) -> &mut Self {
        self.command(CommandKind::LineToHorizontal, relative, &[x])
    }

    pub fn line_to_vertical(&mut self, y: f64, relative: bool) -> &mut Self {
        self.command(CommandKind::LineToVertical, relative, &[y])
    }

    /// Moves to `start`, then appends a cubic curve.
    pub fn cubic_bezier(
        &mut self,
        start: (f64, f64),
        control1: (f64, f64),
        control2: (f64, f64),
        end: (f64, f64),
        relative: bool,
    ) -> &mut Self {
        self.move_to(start.0, start.1, relative).command(
            CommandKind::Cubic,
            relative,
            &[control1.0, control1.1, control2.0, control2.1, end.0, end.1],
        )
    }

    /// Moves to `start`, then appends a smooth cubic curve.
    pub fn smooth_cubic_bezier(
        &mut self,
        start: (f64, f64),
        control2: (f64, f64),
        end: (f64, f64),
        relative: bool,
    ) -> &mut Self {
        self.move_to(start.0, start.1, relative).command(
            CommandKind::SmoothCubic,
            relative,
            &[control2.0, control2.1, end.0, end.1],
        )
    }

    /// Moves to `start`, then appends a quadratic curve.
    pub fn quadratic_bezier(
        &mut self,
        start: (f64, f64),
        control: (f64, f64),
        end: (f64, f64),
        relative: bool,
    ) -> &mut Self {
        self.move_to(start.0, start.1, relative).command(
            CommandKind::Quadratic,
            relative,
            &[control.0, control.1, end.0, end.1],
        )
    }

    /// Moves to `start`, then appends a smooth quadratic curve.
    pub fn smooth_quadratic_bezier(
        &mut self,
        start: (f64, f64),
        end: (f64, f64),
        relative: bool,
    ) -> &mut Self {
        self.move_to(start.0, start.1, relative).command(
            CommandKind::SmoothQuadratic,
            relative,
            &[end.0, end.1],
        )
    }

    /// Appends an elliptical arc with zero x-axis rotation.
    #[allow(clippy::too_many_arguments)]
    pub fn elliptical_arc(
        &mut self,
        radius_x: f64,
        radius_y: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
        relative: bool,
    ) -> &mut Self {
        self.command(
            CommandKind::Arc,
            relative,
            &[
                radius_x,
                radius_y,
                0.0,
                f64::from(u8::from(large_arc)),
                f64::from(u8::from(sweep)),
                x,
                y,
            ],
        )
    }

    /// Full ellipse from two relative half arcs starting at `(cx - rx, cy)`.
    pub fn circle(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, relative: bool) -> &mut Self {
        self.move_to(cx - rx, cy, relative)
            .elliptical_arc(rx, ry, true, true, rx * 2.0, 0.0, true)
            .elliptical_arc(rx, ry, true, true, -rx * 2.0, 0.0, true)
    }
}
