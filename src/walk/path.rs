use rand::Rng;

use crate::{
    foundation::{
        core::Value,
        error::{RoughwalkError, RoughwalkResult},
        math::rescale,
    },
    interp::interpolator::{InterpMode, Interpolator},
    noise::synth::build_noise,
};

/// Octaves summed for every rough path.
pub const NOISE_LEVELS: u32 = 4;

/// Base frequencies that roughness `0` and `1` map to.
pub const ROUGHNESS_FREQUENCY_RANGE: (f64, f64) = (5.0, 15.0);

/// Noise output range stretched onto the waypoint parameter `[0, 1]`.
///
/// Summed octaves can land slightly outside it; the waypoint curve clamps those samples.
pub const NOISE_RANGE: (f64, f64) = (-1.2, 1.2);

/// Octave-0 frequency used for `roughness`.
pub fn roughness_to_frequency(roughness: f64) -> u32 {
    rescale((0.0, 1.0), ROUGHNESS_FREQUENCY_RANGE, roughness).round() as u32
}

/// Sample a random walk that wanders over the curve through `waypoints`.
///
/// Noise is drawn once from `rng` and evaluated at every `xs` sample; each noise value is
/// rescaled from [`NOISE_RANGE`] to a parameter in `[0, 1]` along a linear curve through the
/// evenly spaced waypoints. The output has one value per entry of `xs`.
#[tracing::instrument(
    level = "debug",
    skip(waypoints, xs, rng),
    fields(n_waypoints = waypoints.len(), n_samples = xs.len())
)]
pub fn rough_path<R>(
    roughness: f64,
    waypoints: &[Value],
    xs: &[f64],
    rng: &mut R,
) -> RoughwalkResult<Vec<Value>>
where
    R: Rng + ?Sized,
{
    if !(0.0..=1.0).contains(&roughness) {
        return Err(RoughwalkError::invalid_configuration(format!(
            "roughness must be in [0, 1], got {roughness}"
        )));
    }
    let curve = Interpolator::parametric(waypoints, InterpMode::Linear)?;
    let frequency = roughness_to_frequency(roughness);
    let noise = build_noise(frequency, NOISE_LEVELS, rng)?;
    tracing::trace!(frequency, "noise built");

    Ok(xs
        .iter()
        .map(|&x| curve.eval(rescale(NOISE_RANGE, (0.0, 1.0), noise.eval(x))))
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/walk/path.rs"]
mod tests;
