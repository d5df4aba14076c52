use crate::foundation::core::{BezPath, Point, Vec2};

/// One drawing command of the SVG path mini-language.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum PathCommand {
    /// `M x y`: absolute move.
    MoveTo(Point),
    /// `m dx dy`: relative move.
    MoveBy(Vec2),
    /// `l dx dy`: relative line.
    LineBy(Vec2),
}

impl std::fmt::Display for PathCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MoveTo(p) => write!(f, "M {} {}", p.x, p.y),
            Self::MoveBy(v) => write!(f, "m {} {}", v.x, v.y),
            Self::LineBy(v) => write!(f, "l {} {}", v.x, v.y),
        }
    }
}

/// The complete line figure as an ordered list of drawing commands.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct PathDescription {
    commands: Vec<PathCommand>,
}

impl PathDescription {
    pub(crate) fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Commands in drawing order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Number of drawn (`l`) segments.
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineBy(_)))
            .count()
    }

    /// Text for an SVG `<path d="...">` attribute.
    ///
    /// Numbers use the shortest `f64` decimal form (`24`, `-8`, `4.5`) and never exponent
    /// notation, so magnitudes below `1e-6` or from `1e21` up print as plain digits.
    pub fn to_svg_d(&self) -> String {
        self.to_string()
    }

    /// Resolve relative commands into an absolute [`BezPath`].
    pub fn to_bez_path(&self) -> BezPath {
        let mut bez = BezPath::new();
        let mut pen = Point::ZERO;
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    pen = p;
                    bez.move_to(pen);
                }
                PathCommand::MoveBy(v) => {
                    pen += v;
                    bez.move_to(pen);
                }
                PathCommand::LineBy(v) => {
                    pen += v;
                    bez.line_to(pen);
                }
            }
        }
        bez
    }
}

impl std::fmt::Display for PathDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, cmd) in self.commands.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{cmd}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/command.rs"]
mod tests;
