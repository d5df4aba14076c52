use std::fmt::Write as _;

use crate::pipeline::generate::Kronkel;

/// Standalone SVG document for a figure: a background rectangle and one stroked path.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgDocument {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Path data.
    pub d: String,
    /// Stroke thickness in pixels.
    pub line_width: f64,
    /// Background fill, verbatim.
    pub background: String,
    /// Stroke color, verbatim.
    pub line: String,
}

impl SvgDocument {
    /// Collect everything the document needs from a finished figure.
    pub fn from_kronkel(kronkel: &Kronkel) -> Self {
        let canvas = kronkel.canvas_size();
        Self {
            width: canvas.width,
            height: canvas.height,
            d: kronkel.path().to_svg_d(),
            line_width: kronkel.line_width(),
            background: kronkel.palette().background.to_string(),
            line: kronkel.palette().line.to_string(),
        }
    }

    /// Serialize to SVG 1.1 markup.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::with_capacity(self.d.len() + 320);
        let (w, h) = (self.width, self.height);
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        let _ = writeln!(
            out,
            r#"  <rect x="0" y="0" width="{w}" height="{h}" fill="{}"/>"#,
            escape_attr(&self.background)
        );
        let _ = writeln!(
            out,
            r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="square"/>"#,
            self.d,
            escape_attr(&self.line),
            self.line_width
        );
        out.push_str("</svg>\n");
        out
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
