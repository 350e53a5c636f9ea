//! Confidence value object (0.0 - 1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// How certain the engine is about a recorded answer, between 0 and 1.
///
/// Confidence is a fixed heuristic score attached to each response, not a
/// learned quantity. It feeds only the aggregate metrics computed at
/// finalization.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    /// Full certainty.
    pub const MAX: Self = Self(1.0);

    /// The score assigned when the caller does not supply one.
    pub const DEFAULT: Self = Self(0.9);

    /// Creates a Confidence, clamping to the valid range.
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Creates a Confidence, returning an error if out of range or NaN.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if value.is_nan() || !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::ConfidenceOutOfRange { actual: value });
        }
        Ok(Self(value))
    }

    /// Returns the score as f64.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
