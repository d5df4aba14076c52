use crate::foundation::error::{KronkelError, KronkelResult};

/// Default cell size in pixels.
pub const DEFAULT_TILE: f64 = 8.0;
/// Default number of column pairs.
pub const DEFAULT_WIDTH: u32 = 8;
/// Largest accepted number of column pairs.
pub const MAX_WIDTH: u32 = 8_192;

/// Grid and stroke parameters for one generation run.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GenerateParams {
    /// Number of column pairs; the grid has `2 * desired_width` columns.
    pub desired_width: u32,
    /// Side of one cell in pixels.
    pub tile: f64,
    /// Inset of the grid from the canvas edge in pixels.
    pub margin: f64,
    /// Stroke thickness in pixels.
    pub line_width: f64,
}

impl Default for GenerateParams {
    fn default() -> Self {
        Self::with_tile(DEFAULT_TILE)
    }
}

impl GenerateParams {
    /// Parameters for `tile` with the margin (`3 * tile`) and line width (`0.75 * tile`)
    /// derived from it.
    pub fn with_tile(tile: f64) -> Self {
        Self {
            desired_width: DEFAULT_WIDTH,
            tile,
            margin: default_margin(tile),
            line_width: default_line_width(tile),
        }
    }

    /// Grid columns, always even.
    pub fn columns(&self) -> KronkelResult<u32> {
        self.desired_width.checked_mul(2).ok_or_else(|| {
            KronkelError::invalid_configuration(format!(
                "width {} is too large",
                self.desired_width
            ))
        })
    }

    /// Reject parameters that cannot produce a figure.
    pub fn validate(&self) -> KronkelResult<()> {
        if self.desired_width == 0 {
            return Err(KronkelError::invalid_configuration("width must be > 0"));
        }
        if self.desired_width > MAX_WIDTH {
            return Err(KronkelError::invalid_configuration(format!(
                "width must be <= {MAX_WIDTH}, got {}",
                self.desired_width
            )));
        }
        self.columns()?;
        if !self.tile.is_finite() || self.tile <= 0.0 {
            return Err(KronkelError::invalid_configuration(format!(
                "tile must be a positive number, got {}",
                self.tile
            )));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(KronkelError::invalid_configuration(format!(
                "margin must be a non-negative number, got {}",
                self.margin
            )));
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(KronkelError::invalid_configuration(format!(
                "line width must be a positive number, got {}",
                self.line_width
            )));
        }
        Ok(())
    }
}

pub(crate) fn default_margin(tile: f64) -> f64 {
    3.0 * tile
}

pub(crate) fn default_line_width(tile: f64) -> f64 {
    0.75 * tile
}

#[cfg(test)]
#[path = "../../tests/unit/config/params.rs"]
mod tests;
