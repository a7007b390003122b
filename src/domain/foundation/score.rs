//! Score value object (0.0 to 1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value between 0.0 and 1.0 inclusive.
///
/// Used for per-factor affinity scores, context complexity, and decision
/// confidence. Construction always clamps, so a `Score` read anywhere in
/// the engine is guaranteed to be in range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// Zero score.
    pub const ZERO: Self = Self(0.0);

    /// Neutral midpoint score.
    pub const HALF: Self = Self(0.5);

    /// Maximum score.
    pub const MAX: Self = Self(1.0);

    /// Creates a new Score, clamping to `[0.0, 1.0]`.
    ///
    /// Non-finite inputs clamp to zero.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the complement `1.0 - self`.
    pub fn complement(&self) -> Self {
        Self(1.0 - self.0)
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
