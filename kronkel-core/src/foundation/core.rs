pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Pixel dimensions of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    /// Width in pixels (`2 * margin + columns * tile`).
    pub width: f64,
    /// Height in pixels (`2 * margin + rows * tile`).
    pub height: f64,
}

impl CanvasSize {
    /// The canvas as a rectangle anchored at the origin.
    pub fn to_rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// An opaque color value, handed to the renderer exactly as supplied.
///
/// No parsing happens here; any string the SVG renderer understands (`#rrggbb`, `rgb(...)`,
/// named colors) is accepted.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Wrap a color string without inspecting it.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The color string as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Background and line colors for one figure.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    /// Fill of the background rectangle.
    pub background: Color,
    /// Stroke color of the line.
    pub line: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::new("#ffffff"),
            line: Color::new("#000000"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
