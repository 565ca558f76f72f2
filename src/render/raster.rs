use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{RoughwalkError, RoughwalkResult},
    render::svg::ensure_parent_dir,
};

// Refuse pathological pixmap allocations.
const MAX_DIM: u32 = 16_384;

/// Straight-alpha RGBA8 pixels of a rasterized SVG.
#[derive(Clone, Debug)]
pub struct Raster {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8, not premultiplied.
    pub rgba8: Vec<u8>,
}

/// Rasterize an SVG document at its intrinsic size.
pub fn rasterize_svg(svg: &str) -> RoughwalkResult<Raster> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(svg.as_bytes(), &opts).context("parse svg tree")?;

    fn to_px(v: f32) -> RoughwalkResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(RoughwalkError::render("svg has invalid width/height"));
        }
        Ok((v.ceil() as u32).max(1))
    }
    let size = tree.size();
    let width = to_px(size.width())?;
    let height = to_px(size.height())?;
    if width > MAX_DIM || height > MAX_DIM {
        return Err(RoughwalkError::render(format!(
            "svg raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| RoughwalkError::render("failed to allocate svg pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    let mut rgba8 = pixmap.take();
    demultiply_rgba8_in_place(&mut rgba8);
    Ok(Raster {
        width,
        height,
        rgba8,
    })
}

/// Encode `raster` as PNG at `path`, creating parent directories as needed.
pub fn write_png(path: impl AsRef<Path>, raster: &Raster) -> RoughwalkResult<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        &raster.rgba8,
        raster.width,
        raster.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
