use crate::{
    config::params::GenerateParams,
    encode::bitstream::{Bitstream, encode},
    foundation::core::{CanvasSize, Palette},
    foundation::error::KronkelResult,
    layout::grid::{GridLayout, layout},
    path::builder::build_path,
    path::command::PathDescription,
    text::normalize::normalize,
};

/// File stem used when the normalized message is empty.
pub const FALLBACK_FILE_STEM: &str = "kronkelschrift";

/// A finished Kronkelschrift figure.
///
/// Every stage's output is kept so callers can echo the normalized text, inspect the bits or
/// hand the geometry to a renderer. Built only by [`generate`].
#[derive(Clone, Debug, PartialEq)]
pub struct Kronkel {
    normalized_text: String,
    bitstream: Bitstream,
    grid: GridLayout,
    line_width: f64,
    path: PathDescription,
    palette: Palette,
}

impl Kronkel {
    /// Input text after lowercasing and filtering.
    pub fn normalized_text(&self) -> &str {
        &self.normalized_text
    }

    /// Padded bitstream drawn by the figure.
    pub fn bitstream(&self) -> &Bitstream {
        &self.bitstream
    }

    /// Grid geometry.
    pub fn grid(&self) -> &GridLayout {
        &self.grid
    }

    /// Canvas size in pixels.
    pub fn canvas_size(&self) -> CanvasSize {
        self.grid.canvas
    }

    /// Stroke thickness in pixels.
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// The line figure.
    pub fn path(&self) -> &PathDescription {
        &self.path
    }

    /// Colors, exactly as supplied.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Base name for exported files: the normalized text, or [`FALLBACK_FILE_STEM`].
    pub fn file_stem(&self) -> &str {
        if self.normalized_text.is_empty() {
            FALLBACK_FILE_STEM
        } else {
            &self.normalized_text
        }
    }

    /// Flat, serializable view of the figure.
    pub fn summary(&self) -> KronkelSummary {
        KronkelSummary {
            text: self.normalized_text.clone(),
            bits: self.bitstream.len(),
            columns: self.grid.columns,
            rows: self.grid.rows,
            width: self.grid.canvas.width,
            height: self.grid.canvas.height,
            line_width: self.line_width,
            background: self.palette.background.to_string(),
            line: self.palette.line.to_string(),
            d: self.path.to_svg_d(),
        }
    }
}

/// JSON-friendly description of a [`Kronkel`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KronkelSummary {
    /// Normalized text.
    pub text: String,
    /// Bitstream length after padding.
    pub bits: usize,
    /// Grid columns.
    pub columns: u32,
    /// Grid rows.
    pub rows: u32,
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Stroke thickness in pixels.
    pub line_width: f64,
    /// Background color.
    pub background: String,
    /// Line color.
    pub line: String,
    /// SVG path data.
    pub d: String,
}

/// Run the whole pipeline: normalize, encode, lay out and build the path.
///
/// Fails only on invalid `params`. Empty or fully unsupported text yields a border-only figure
/// with zero rows.
#[tracing::instrument(skip(raw_text, palette), fields(raw_len = raw_text.len()))]
pub fn generate(
    raw_text: &str,
    params: &GenerateParams,
    palette: Palette,
) -> KronkelResult<Kronkel> {
    params.validate()?;
    let columns = params.columns()?;

    let normalized_text = normalize(raw_text);
    tracing::debug!(len = normalized_text.len(), "normalized text");

    let bitstream = encode(&normalized_text, columns)?;
    tracing::debug!(bits = bitstream.len(), "encoded bitstream");

    let grid = layout(bitstream.len(), columns, params.tile, params.margin)?;
    tracing::debug!(
        rows = grid.rows,
        width = grid.canvas.width,
        height = grid.canvas.height,
        "grid layout"
    );

    let path = build_path(&bitstream, &grid);
    tracing::debug!(commands = path.commands().len(), "built path");

    Ok(Kronkel {
        normalized_text,
        bitstream,
        grid,
        line_width: params.line_width,
        path,
        palette,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/generate.rs"]
mod tests;
