use rand::Rng;

use crate::{
    foundation::{
        error::{RoughwalkError, RoughwalkResult},
        math::linspace,
    },
    interp::interpolator::{InterpMode, Interpolator},
};

/// Smallest octave-0 frequency [`build_noise`] accepts.
pub const MIN_BASE_FREQUENCY: u32 = 3;

/// One layer of the noise sum: `frequency = base * 2^level`, `amplitude = 1 / 2^level`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Octave {
    /// Number of random samples drawn across `[0, 1]`.
    pub frequency: u32,
    /// Half-width of the uniform sample range.
    pub amplitude: f64,
}

impl Octave {
    /// Octave parameters for `level`, or an error if the frequency overflows `u32`.
    pub fn at_level(base_frequency: u32, level: u32) -> RoughwalkResult<Self> {
        let frequency = 1u32
            .checked_shl(level)
            .and_then(|scale| base_frequency.checked_mul(scale))
            .ok_or_else(|| {
                RoughwalkError::validation(format!(
                    "octave {level} frequency overflows for base frequency {base_frequency}"
                ))
            })?;
        Ok(Self {
            frequency,
            amplitude: 0.5f64.powi(level as i32),
        })
    }

    /// Knots fitted for this octave; never fewer than the cubic fit needs.
    pub fn point_count(self) -> usize {
        (self.frequency as usize).max(InterpMode::Cubic.min_points())
    }
}

/// Layered 1-D value noise over `[0, 1]`.
///
/// The shape is fixed at construction; [`Noise::eval`] is pure. Values concentrate in roughly
/// `[-1, 1]` but are not hard-bounded.
#[derive(Clone, Debug)]
pub struct Noise {
    octaves: Vec<Interpolator>,
}

impl Noise {
    /// Sum of every octave's curve at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        self.octaves.iter().map(|o| o.eval_scalar(x)).sum()
    }

    /// Number of octaves summed.
    pub fn levels(&self) -> usize {
        self.octaves.len()
    }
}

/// Draw a new [`Noise`] with `levels` octaves starting at `base_frequency`.
///
/// Each octave samples `frequency` uniform values in `[-amplitude, amplitude]`, spaces them
/// evenly on `[0, 1]` and fits a cubic spline through them. Arguments are checked before any
/// randomness is drawn.
#[tracing::instrument(level = "trace", skip(rng))]
pub fn build_noise<R>(base_frequency: u32, levels: u32, rng: &mut R) -> RoughwalkResult<Noise>
where
    R: Rng + ?Sized,
{
    if base_frequency < MIN_BASE_FREQUENCY {
        return Err(RoughwalkError::FrequencyTooLow {
            frequency: base_frequency,
            min: MIN_BASE_FREQUENCY,
        });
    }
    if levels == 0 {
        return Err(RoughwalkError::validation("noise needs at least one level"));
    }
    let plan = (0..levels)
        .map(|level| Octave::at_level(base_frequency, level))
        .collect::<RoughwalkResult<Vec<_>>>()?;

    let mut octaves = Vec::with_capacity(plan.len());
    for octave in plan {
        let n = octave.point_count();
        let amp = octave.amplitude;
        let ys: Vec<f64> = (0..n).map(|_| rng.gen_range(-amp..=amp)).collect();
        octaves.push(Interpolator::scalar(
            linspace(0.0, 1.0, n),
            ys,
            InterpMode::Cubic,
        )?);
    }

    Ok(Noise { octaves })
}

#[cfg(test)]
#[path = "../../tests/unit/noise/synth.rs"]
mod tests;
