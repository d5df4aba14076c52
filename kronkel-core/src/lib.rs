//! Kronkel turns text into Kronkelschrift, a binary line cipher drawn as a braid of short
//! strokes on a square grid.
//!
//! # Pipeline overview
//!
//! 1. **Normalize**: lowercase the text and keep only `a`..=`z` and `,`
//! 2. **Encode**: replace each symbol with its prefix-free code and pad the bits to whole rows
//! 3. **Lay out**: derive the row count and canvas size from the bit count and column count
//! 4. **Build path**: a dashed border plus one two-stroke connector per bit, as SVG path data
//! 5. **Render** (optional): hand the figure to an [`OutputSink`] (SVG file, PNG file, memory)
//!
//! [`generate`] runs steps 1–4 and returns a [`Kronkel`]; [`run`] wires an [`InputSource`] to an
//! [`OutputSink`] around it.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No shared state**: every run allocates its own intermediate values.
//! - **Colors are opaque**: palettes are handed to the renderer untouched.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod alphabet;
mod config;
mod encode;
mod foundation;
mod layout;
mod path;
mod pipeline;
mod render;
mod text;

pub use alphabet::table::{CODE_TABLE, CodeEntry, code_for, is_supported};
pub use config::params::{DEFAULT_TILE, DEFAULT_WIDTH, GenerateParams, MAX_WIDTH};
pub use config::settings::Settings;
pub use encode::bitstream::{Bitstream, encode};
pub use foundation::core::{BezPath, CanvasSize, Color, Palette, Point, Rect, Vec2};
pub use foundation::error::{KronkelError, KronkelResult};
pub use layout::grid::{GridLayout, layout};
pub use path::builder::build_path;
pub use path::command::{PathCommand, PathDescription};
pub use pipeline::generate::{FALLBACK_FILE_STEM, Kronkel, KronkelSummary, generate};
pub use pipeline::session::{GenerateRequest, InputSource, OutputSink, run};
pub use render::raster::{MAX_RASTER_DIM, encode_png, raster_size, rasterize};
pub use render::sink::{InMemorySink, PngFileSink, SvgFileSink, ensure_parent_dir};
pub use render::svg::SvgDocument;
pub use text::normalize::normalize;
