use crate::{
    encode::bitstream::bits_per_row,
    foundation::core::{CanvasSize, Point},
    foundation::error::{KronkelError, KronkelResult},
};

/// Resolved grid geometry for one padded bitstream.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GridLayout {
    /// Grid columns; always even.
    pub columns: u32,
    /// Grid rows, `bitstream_len / (columns / 2)`.
    pub rows: u32,
    /// Side of one cell in pixels.
    pub tile: f64,
    /// Inset of the grid from the canvas edge in pixels.
    pub margin: f64,
    /// Size of the drawing surface.
    pub canvas: CanvasSize,
}

impl GridLayout {
    /// Bits stored in each row.
    pub fn bits_per_row(&self) -> usize {
        (self.columns / 2) as usize
    }

    /// Grid cell `(x, y)` of bit `i`.
    ///
    /// Each row holds `columns / 2` bits on every other column: even rows use the even columns,
    /// odd rows the odd ones, both left to right. Stacked rows therefore interleave into the
    /// braid.
    pub fn cell(&self, i: usize) -> (usize, usize) {
        let columns = self.columns as usize;
        let half = columns / 2;
        let c = i % columns;
        let x = if c < half { 2 * c } else { 1 + 2 * (c - half) };
        (x, i / half)
    }

    /// Pixel position of the top-left corner of bit `i`'s cell.
    pub fn cell_origin(&self, i: usize) -> Point {
        let (x, y) = self.cell(i);
        Point::new(
            self.margin + (x as f64) * self.tile,
            self.margin + (y as f64) * self.tile,
        )
    }
}

/// Compute rows and canvas size for a padded bitstream of `bitstream_len` bits.
///
/// `bitstream_len` must be a multiple of `columns / 2`, which [`crate::encode`] guarantees.
pub fn layout(
    bitstream_len: usize,
    columns: u32,
    tile: f64,
    margin: f64,
) -> KronkelResult<GridLayout> {
    let per_row = bits_per_row(columns)?;
    if bitstream_len % per_row != 0 {
        return Err(KronkelError::invalid_configuration(format!(
            "bitstream of {bitstream_len} bits does not fill rows of {per_row}"
        )));
    }
    let rows = u32::try_from(bitstream_len / per_row).map_err(|_| {
        KronkelError::invalid_configuration(format!("bitstream of {bitstream_len} bits is too long"))
    })?;

    let canvas = CanvasSize {
        width: 2.0 * margin + f64::from(columns) * tile,
        height: 2.0 * margin + f64::from(rows) * tile,
    };
    Ok(GridLayout {
        columns,
        rows,
        tile,
        margin,
        canvas,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
