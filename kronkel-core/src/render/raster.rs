use std::io::Cursor;

use anyhow::Context as _;

use crate::{
    foundation::core::CanvasSize,
    foundation::error::{KronkelError, KronkelResult},
    pipeline::generate::Kronkel,
    render::svg::SvgDocument,
};

/// Largest raster side accepted, in pixels.
pub const MAX_RASTER_DIM: u32 = 16_384;

/// Whole-pixel raster size for a canvas, rounding partial pixels up.
pub fn raster_size(canvas: CanvasSize) -> KronkelResult<(u32, u32)> {
    fn to_px(v: f64, what: &str) -> KronkelResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(KronkelError::invalid_configuration(format!(
                "canvas {what} must be positive to rasterize, got {v}"
            )));
        }
        let px = v.ceil();
        if px > f64::from(MAX_RASTER_DIM) {
            return Err(KronkelError::invalid_configuration(format!(
                "canvas {what} {px} exceeds {MAX_RASTER_DIM} px"
            )));
        }
        Ok(px as u32)
    }

    Ok((to_px(canvas.width, "width")?, to_px(canvas.height, "height")?))
}

/// Render a figure to straight (non-premultiplied) RGBA8 pixels.
pub fn rasterize(kronkel: &Kronkel) -> KronkelResult<image::RgbaImage> {
    let (width, height) = raster_size(kronkel.canvas_size())?;

    let svg = SvgDocument::from_kronkel(kronkel).to_svg_string();
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(svg.as_bytes(), &opts)
        .map_err(|e| KronkelError::render(format!("parse generated svg: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| KronkelError::render("failed to allocate pixmap"))?;
    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let rgba = pixmap
        .pixels()
        .iter()
        .flat_map(|px| {
            let c = px.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect::<Vec<u8>>();
    image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| KronkelError::render("pixel buffer does not match raster size"))
}

/// Encode pixels as PNG bytes.
pub fn encode_png(img: &image::RgbaImage) -> KronkelResult<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
