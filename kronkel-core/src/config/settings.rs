use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    config::params::{
        DEFAULT_TILE, DEFAULT_WIDTH, GenerateParams, default_line_width, default_margin,
    },
    foundation::core::{Color, Palette},
    foundation::error::{KronkelError, KronkelResult},
    pipeline::session::{GenerateRequest, InputSource},
};

/// User-editable generator settings, usually loaded from JSON.
///
/// Every field is optional. Missing sizes fall back to the defaults, and a missing margin or
/// line width follows the tile size (`3 * tile` and `0.75 * tile`).
///
/// ```json
/// { "text": "Hello, world", "width": 6, "tile": 10, "line_color": "#223344" }
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Message to encode.
    pub text: Option<String>,
    /// Number of column pairs.
    pub width: Option<u32>,
    /// Cell size in pixels.
    pub tile: Option<f64>,
    /// Grid inset in pixels.
    pub margin: Option<f64>,
    /// Stroke thickness in pixels.
    pub line_width: Option<f64>,
    /// Background fill.
    pub background_color: Option<Color>,
    /// Line stroke color.
    pub line_color: Option<Color>,
}

impl Settings {
    /// Parse settings from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> KronkelResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| KronkelError::config(format!("parse settings JSON: {e}")))
    }

    /// Parse settings from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> KronkelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            KronkelError::config(format!("open settings JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Layer `overrides` on top of `self`; fields set in `overrides` win.
    pub fn merged_with(self, overrides: Settings) -> Settings {
        Settings {
            text: overrides.text.or(self.text),
            width: overrides.width.or(self.width),
            tile: overrides.tile.or(self.tile),
            margin: overrides.margin.or(self.margin),
            line_width: overrides.line_width.or(self.line_width),
            background_color: overrides.background_color.or(self.background_color),
            line_color: overrides.line_color.or(self.line_color),
        }
    }

    /// Resolve defaults into a request. Validation happens when the request is generated.
    pub fn to_request(&self) -> GenerateRequest {
        let tile = self.tile.unwrap_or(DEFAULT_TILE);
        let defaults = Palette::default();
        GenerateRequest {
            raw_text: self.text.clone().unwrap_or_default(),
            params: GenerateParams {
                desired_width: self.width.unwrap_or(DEFAULT_WIDTH),
                tile,
                margin: self.margin.unwrap_or_else(|| default_margin(tile)),
                line_width: self.line_width.unwrap_or_else(|| default_line_width(tile)),
            },
            palette: Palette {
                background: self.background_color.clone().unwrap_or(defaults.background),
                line: self.line_color.clone().unwrap_or(defaults.line),
            },
        }
    }
}

impl InputSource for Settings {
    fn read_request(&mut self) -> KronkelResult<GenerateRequest> {
        Ok(self.to_request())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
