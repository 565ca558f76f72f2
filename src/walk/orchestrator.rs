use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use rayon::prelude::*;

use crate::{
    config::model::Configuration,
    foundation::{
        core::{Rgb8, Value},
        error::{RoughwalkError, RoughwalkResult},
        math::linspace,
    },
    walk::path::rough_path,
};

/// One visual attribute driven by its own rough path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Fill color.
    Color,
    /// Fill opacity.
    Opacity,
    /// Circle radius.
    Radius,
    /// Horizontal center.
    X,
    /// Vertical center.
    Y,
}

impl Attribute {
    /// Every attribute, in the order seeds are drawn.
    pub const ALL: [Self; 5] = [Self::Color, Self::Opacity, Self::Radius, Self::X, Self::Y];

    /// Lowercase name, matching the configuration key.
    pub fn name(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Opacity => "opacity",
            Self::Radius => "radius",
            Self::X => "x",
            Self::Y => "y",
        }
    }

    fn waypoints(self, config: &Configuration) -> Vec<Value> {
        fn scalars(vs: &[f64]) -> Vec<Value> {
            vs.iter().copied().map(Value::Scalar).collect()
        }

        match self {
            Self::Color => config.color.iter().map(|c| c.to_value()).collect(),
            Self::Opacity => scalars(&config.opacity),
            Self::Radius => scalars(&config.radius),
            Self::X => scalars(&config.x),
            Self::Y => scalars(&config.y),
        }
    }
}

/// One walk step: a sample of every attribute at the same position.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Circle {
    /// Center x, as a fraction of canvas width.
    pub x: f64,
    /// Center y, as a fraction of canvas height.
    pub y: f64,
    /// Radius, as a fraction of the shorter canvas side.
    pub radius: f64,
    /// Fill color.
    pub color: Rgb8,
    /// Fill opacity.
    pub opacity: f64,
}

/// Execution options for [`walk_with`].
#[derive(Clone, Copy, Debug, Default)]
pub struct WalkOpts {
    /// Sample the attribute paths on the rayon pool instead of one after another.
    pub parallel: bool,
}

/// Run a walk sequentially. See [`walk_with`].
pub fn walk<R>(config: &Configuration, rng: &mut R) -> RoughwalkResult<Vec<Circle>>
where
    R: Rng + ?Sized,
{
    walk_with(config, WalkOpts::default(), rng)
}

/// Generate `config.n_points` circles, each attribute following its own rough path.
///
/// One seed per attribute is drawn from `rng` in [`Attribute::ALL`] order and each path runs on
/// its own PCG stream, so the output does not depend on `opts.parallel`. Nothing is returned
/// unless every path succeeds.
#[tracing::instrument(
    skip(config, rng),
    fields(n_points = config.n_points, roughness = config.roughness)
)]
pub fn walk_with<R>(
    config: &Configuration,
    opts: WalkOpts,
    rng: &mut R,
) -> RoughwalkResult<Vec<Circle>>
where
    R: Rng + ?Sized,
{
    config.validate()?;

    let xs = linspace(0.0, 1.0, config.n_points);
    let jobs: Vec<(Attribute, u64)> = Attribute::ALL
        .iter()
        .map(|&attr| (attr, rng.r#gen::<u64>()))
        .collect();

    let run = |&(attr, seed): &(Attribute, u64)| -> RoughwalkResult<Vec<Value>> {
        tracing::debug!(attribute = attr.name(), seed, "sampling rough path");
        let mut stream = Pcg64::seed_from_u64(seed);
        rough_path(
            config.roughness,
            &attr.waypoints(config),
            &xs,
            &mut stream,
        )
    };
    let paths = if opts.parallel {
        jobs.par_iter().map(run).collect::<RoughwalkResult<Vec<_>>>()?
    } else {
        jobs.iter().map(run).collect::<RoughwalkResult<Vec<_>>>()?
    };

    zip_circles(config.n_points, &paths)
}

// `paths` is indexed like `Attribute::ALL`.
fn zip_circles(n_points: usize, paths: &[Vec<Value>]) -> RoughwalkResult<Vec<Circle>> {
    for (attr, path) in Attribute::ALL.iter().zip(paths) {
        if path.len() != n_points {
            return Err(RoughwalkError::mismatched_lengths(format!(
                "{} path has {} samples, expected {n_points}",
                attr.name(),
                path.len()
            )));
        }
    }
    let [color, opacity, radius, x, y] = paths else {
        return Err(RoughwalkError::mismatched_lengths(format!(
            "expected {} attribute paths, got {}",
            Attribute::ALL.len(),
            paths.len()
        )));
    };

    let scalar = |attr: Attribute, v: &Value| {
        v.as_scalar().ok_or_else(|| {
            RoughwalkError::validation(format!("{} sample is not a scalar", attr.name()))
        })
    };
    (0..n_points)
        .map(|k| -> RoughwalkResult<Circle> {
            Ok(Circle {
                x: scalar(Attribute::X, &x[k])?,
                y: scalar(Attribute::Y, &y[k])?,
                radius: scalar(Attribute::Radius, &radius[k])?,
                color: Rgb8::from_value(&color[k])?,
                opacity: scalar(Attribute::Opacity, &opacity[k])?,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/walk/orchestrator.rs"]
mod tests;
