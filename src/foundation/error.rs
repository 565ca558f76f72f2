/// Convenience result type used across roughwalk.
pub type RoughwalkResult<T> = Result<T, RoughwalkError>;

/// Top-level error taxonomy used by the walk pipeline.
#[derive(thiserror::Error, Debug)]
pub enum RoughwalkError {
    /// Octave-0 frequency is below what the cubic noise fit can use.
    #[error("frequency too low: base frequency {frequency} is below the minimum of {min}")]
    FrequencyTooLow {
        /// Requested base frequency.
        frequency: u32,
        /// Smallest accepted base frequency.
        min: u32,
    },

    /// Too few control points for the requested interpolation mode.
    #[error("insufficient points: got {got} control points, need at least {need}")]
    InsufficientPoints {
        /// Number of control points supplied.
        got: usize,
        /// Minimum number of control points for the mode.
        need: usize,
    },

    /// Per-attribute sequences that must line up positionally do not.
    #[error("mismatched lengths: {0}")]
    MismatchedLengths(String),

    /// Configuration values outside their allowed ranges.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Malformed interpolator or noise input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while rasterizing rendered output.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RoughwalkError {
    /// Build a [`RoughwalkError::MismatchedLengths`] value.
    pub fn mismatched_lengths(msg: impl Into<String>) -> Self {
        Self::MismatchedLengths(msg.into())
    }

    /// Build a [`RoughwalkError::InvalidConfiguration`] value.
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Build a [`RoughwalkError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RoughwalkError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`RoughwalkError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
