use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::{
        core::Rgb8,
        error::{RoughwalkError, RoughwalkResult},
    },
    walk::orchestrator::Circle,
};

/// Canvas size and backdrop for [`render_svg`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderSettings {
    /// Canvas width in SVG user units.
    pub width: u32,
    /// Canvas height in SVG user units.
    pub height: u32,
    /// Solid backdrop; `None` leaves the canvas transparent.
    pub background: Option<Rgb8>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
            background: Some(Rgb8::new(0xff, 0xff, 0xff)),
        }
    }
}

/// Emit a standalone SVG document with one `<circle>` per walk step, in walk order.
///
/// Circle coordinates are fractions of the canvas: `x` and `y` scale by width and height,
/// `radius` by the shorter side.
pub fn render_svg(circles: &[Circle], settings: &RenderSettings) -> RoughwalkResult<String> {
    let (w, h) = (settings.width, settings.height);
    if w == 0 || h == 0 {
        return Err(RoughwalkError::validation(format!(
            "canvas must be non-empty, got {w}x{h}"
        )));
    }
    let side = f64::from(w.min(h));

    let mut out = String::with_capacity(128 + circles.len() * 96);
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
    ));
    if let Some(bg) = settings.background {
        out.push_str(&format!(
            "  <rect width=\"{w}\" height=\"{h}\" fill=\"{}\"/>\n",
            bg.to_hex()
        ));
    }
    for c in circles {
        out.push_str(&format!(
            "  <circle cx=\"{:.3}\" cy=\"{:.3}\" r=\"{:.3}\" fill=\"{}\" fill-opacity=\"{:.4}\"/>\n",
            c.x * f64::from(w),
            c.y * f64::from(h),
            (c.radius * side).max(0.0),
            c.color.to_hex(),
            c.opacity.clamp(0.0, 1.0),
        ));
    }
    out.push_str("</svg>\n");
    Ok(out)
}

/// Write `svg` to `path`, creating parent directories as needed.
pub fn write_svg(path: impl AsRef<Path>, svg: &str) -> RoughwalkResult<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    std::fs::write(path, svg).with_context(|| format!("write svg '{}'", path.display()))?;
    Ok(())
}

pub(crate) fn ensure_parent_dir(path: &Path) -> RoughwalkResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
