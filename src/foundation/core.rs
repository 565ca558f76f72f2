use crate::foundation::error::{RoughwalkError, RoughwalkResult};

/// A control-point or waypoint value: one real, or a fixed-arity vector of reals.
///
/// Serialized untagged, so `0.5` is a scalar and `[0, 128, 255]` is a 3-component vector.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A single real.
    Scalar(f64),
    /// Several reals interpolated component-wise.
    Vector(Vec<f64>),
}

/// Shape of a [`Value`]; every point of one control-point set shares it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Shape {
    Scalar,
    Vector(usize),
}

impl Shape {
    pub(crate) fn arity(self) -> usize {
        match self {
            Self::Scalar => 1,
            Self::Vector(n) => n,
        }
    }

    pub(crate) fn assemble(self, components: Vec<f64>) -> Value {
        match self {
            Self::Scalar => Value::Scalar(components[0]),
            Self::Vector(_) => Value::Vector(components),
        }
    }
}

impl Value {
    /// Number of components (1 for a scalar).
    pub fn arity(&self) -> usize {
        self.components().len()
    }

    /// Component view; a scalar is a one-element slice.
    pub fn components(&self) -> &[f64] {
        match self {
            Self::Scalar(v) => std::slice::from_ref(v),
            Self::Vector(v) => v,
        }
    }

    /// The scalar payload, or `None` for vectors.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Vector(_) => None,
        }
    }

    pub(crate) fn shape(&self) -> Shape {
        match self {
            Self::Scalar(_) => Shape::Scalar,
            Self::Vector(v) => Shape::Vector(v.len()),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Self::Vector(v)
    }
}

impl<const N: usize> From<[f64; N]> for Value {
    fn from(v: [f64; N]) -> Self {
        Self::Vector(v.to_vec())
    }
}

/// Straight (non-premultiplied) 8-bit RGB color.
///
/// Serializes as a `#rrggbb` string; see `config::color` for the accepted input forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form used in SVG attributes.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as a 3-component [`Value`] for interpolation.
    pub fn to_value(self) -> Value {
        Value::Vector(vec![
            f64::from(self.r),
            f64::from(self.g),
            f64::from(self.b),
        ])
    }

    /// Round and clamp a 3-component value back into channel range.
    pub fn from_value(v: &Value) -> RoughwalkResult<Self> {
        fn channel(c: f64) -> u8 {
            c.round().clamp(0.0, 255.0) as u8
        }

        match v.components() {
            [r, g, b] => Ok(Self::new(channel(*r), channel(*g), channel(*b))),
            _ => Err(RoughwalkError::validation(format!(
                "color value must have 3 components, got {}",
                v.arity()
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
