//! roughwalk draws generative SVG art from circles that wander along layered-noise random walks.
//!
//! Every circle attribute (position, radius, color, opacity) follows its own "rough path": a walk
//! over a curve through user waypoints, steered by 1-D value noise.
//!
//! # Pipeline overview
//!
//! 1. **Noise**: `build_noise` sums cubic-spline octaves of uniform random samples into a
//!    [`Noise`] over `[0, 1]`.
//! 2. **Path**: [`rough_path`] evaluates fresh noise on a sample grid and maps each value onto a
//!    linear curve through the waypoints.
//! 3. **Walk**: [`walk`] runs one rough path per attribute of a [`Configuration`] and zips them
//!    into [`Circle`]s.
//! 4. **Render** (optional): [`render_svg`] emits an SVG document; [`rasterize_svg`] and
//!    [`write_png`] turn it into a PNG.
//!
//! Randomness is always injected as a [`rand::Rng`], so seeded generators give reproducible art.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod interp;
mod noise;
mod render;
mod walk;

pub use config::color::parse_hex;
pub use config::model::Configuration;
pub use foundation::core::{Rgb8, Value};
pub use foundation::error::{RoughwalkError, RoughwalkResult};
pub use foundation::math::{linspace, rescale};
pub use interp::interpolator::{InterpMode, Interpolator};
pub use noise::synth::{MIN_BASE_FREQUENCY, Noise, Octave, build_noise};
pub use render::raster::{Raster, rasterize_svg, write_png};
pub use render::svg::{RenderSettings, render_svg, write_svg};
pub use walk::orchestrator::{Attribute, Circle, WalkOpts, walk, walk_with};
pub use walk::path::{
    NOISE_LEVELS, NOISE_RANGE, ROUGHNESS_FREQUENCY_RANGE, rough_path, roughness_to_frequency,
};
