use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    foundation::error::KronkelResult,
    pipeline::generate::Kronkel,
    pipeline::session::OutputSink,
    render::raster::rasterize,
    render::svg::SvgDocument,
};

/// In-memory sink for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemorySink {
    figures: Vec<Kronkel>,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Figures received so far, oldest first.
    pub fn figures(&self) -> &[Kronkel] {
        &self.figures
    }
}

impl OutputSink for InMemorySink {
    fn consume(&mut self, kronkel: &Kronkel) -> KronkelResult<()> {
        self.figures.push(kronkel.clone());
        Ok(())
    }
}

/// Writes each figure as an SVG file.
#[derive(Debug, Clone)]
pub struct SvgFileSink {
    out_path: PathBuf,
}

impl SvgFileSink {
    /// Sink writing to `out_path`, replacing any existing file.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
        }
    }

    /// Destination file.
    pub fn out_path(&self) -> &Path {
        &self.out_path
    }
}

impl OutputSink for SvgFileSink {
    fn consume(&mut self, kronkel: &Kronkel) -> KronkelResult<()> {
        ensure_parent_dir(&self.out_path)?;
        let svg = SvgDocument::from_kronkel(kronkel).to_svg_string();
        std::fs::write(&self.out_path, svg)
            .with_context(|| format!("write svg '{}'", self.out_path.display()))?;
        tracing::info!(path = %self.out_path.display(), "wrote svg");
        Ok(())
    }
}

/// Rasterizes each figure and writes it as a PNG file.
#[derive(Debug, Clone)]
pub struct PngFileSink {
    out_path: PathBuf,
}

impl PngFileSink {
    /// Sink writing to `out_path`, replacing any existing file.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
        }
    }

    /// Destination file.
    pub fn out_path(&self) -> &Path {
        &self.out_path
    }
}

impl OutputSink for PngFileSink {
    fn consume(&mut self, kronkel: &Kronkel) -> KronkelResult<()> {
        ensure_parent_dir(&self.out_path)?;
        let img = rasterize(kronkel)?;
        img.save_with_format(&self.out_path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", self.out_path.display()))?;
        tracing::info!(
            path = %self.out_path.display(),
            width = img.width(),
            height = img.height(),
            "wrote png"
        );
        Ok(())
    }
}

/// Create the parent directory of `path` if needed.
pub fn ensure_parent_dir(path: &Path) -> KronkelResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/sink.rs"]
mod tests;
