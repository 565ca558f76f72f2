use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::foundation::{
    core::Rgb8,
    error::{RoughwalkError, RoughwalkResult},
};

/// Everything a walk needs: roughness, sample count and per-attribute waypoints.
///
/// Fields omitted from JSON fall back to [`Configuration::default`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    /// Path jaggedness in `[0, 1]`.
    pub roughness: f64,
    /// Circles to generate (`>= 2`).
    pub n_points: usize,
    /// Fill color waypoints.
    pub color: Vec<Rgb8>,
    /// Fill opacity waypoints.
    pub opacity: Vec<f64>,
    /// Radius waypoints, as a fraction of the shorter canvas side.
    pub radius: Vec<f64>,
    /// Horizontal center waypoints, as a fraction of canvas width.
    pub x: Vec<f64>,
    /// Vertical center waypoints, as a fraction of canvas height.
    pub y: Vec<f64>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            roughness: 0.5,
            n_points: 400,
            color: vec![
                Rgb8::new(0x26, 0x46, 0x53),
                Rgb8::new(0x2a, 0x9d, 0x8f),
                Rgb8::new(0xe9, 0xc4, 0x6a),
                Rgb8::new(0xf4, 0xa2, 0x61),
                Rgb8::new(0xe7, 0x6f, 0x51),
            ],
            opacity: vec![0.15, 0.6, 0.3],
            radius: vec![0.005, 0.04, 0.01],
            x: vec![0.1, 0.9],
            y: vec![0.1, 0.9],
        }
    }
}

impl Configuration {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> RoughwalkResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| RoughwalkError::serde(format!("parse configuration JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> RoughwalkResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open configuration JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Pretty-printed JSON form.
    pub fn to_json_pretty(&self) -> RoughwalkResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RoughwalkError::serde(format!("serialize configuration JSON: {e}")))
    }

    /// Check value ranges and waypoint counts.
    pub fn validate(&self) -> RoughwalkResult<()> {
        if !(0.0..=1.0).contains(&self.roughness) {
            return Err(RoughwalkError::invalid_configuration(format!(
                "roughness must be in [0, 1], got {}",
                self.roughness
            )));
        }
        if self.n_points < 2 {
            return Err(RoughwalkError::invalid_configuration(format!(
                "n_points must be >= 2, got {}",
                self.n_points
            )));
        }

        check_waypoint_count("color", self.color.len())?;
        for (name, values) in [
            ("opacity", &self.opacity),
            ("radius", &self.radius),
            ("x", &self.x),
            ("y", &self.y),
        ] {
            check_waypoint_count(name, values.len())?;
            if let Some(i) = values.iter().position(|v| !v.is_finite()) {
                return Err(RoughwalkError::invalid_configuration(format!(
                    "{name} waypoint {i} is not finite"
                )));
            }
        }
        Ok(())
    }
}

fn check_waypoint_count(name: &str, len: usize) -> RoughwalkResult<()> {
    if len < 2 {
        return Err(RoughwalkError::invalid_configuration(format!(
            "{name} needs at least 2 waypoints, got {len}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
