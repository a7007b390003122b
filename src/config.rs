//! Engine configuration.

use serde::Deserialize;

use crate::domain::foundation::ValidationError;
use crate::domain::scoring::BusinessHours;

fn default_history_capacity() -> usize {
    1024
}

fn default_learning_capacity() -> usize {
    256
}

fn default_business_hours_start() -> u32 {
    9
}

fn default_business_hours_end() -> u32 {
    17
}

/// Tunable engine limits and policy knobs.
///
/// All fields default individually, so hosts can deserialize a partial
/// config or just use `EngineConfig::default()`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Maximum decisions retained for historical-success lookups.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Maximum interactions/outcomes retained per learning record.
    #[serde(default = "default_learning_capacity")]
    pub learning_capacity: usize,

    /// First hour (inclusive) treated as business hours, UTC.
    #[serde(default = "default_business_hours_start")]
    pub business_hours_start: u32,

    /// Last hour (inclusive) treated as business hours, UTC.
    #[serde(default = "default_business_hours_end")]
    pub business_hours_end: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
            learning_capacity: default_learning_capacity(),
            business_hours_start: default_business_hours_start(),
            business_hours_end: default_business_hours_end(),
        }
    }
}

impl EngineConfig {
    /// The business-hours window as used by the temporal scorer.
    pub fn business_hours(&self) -> BusinessHours {
        BusinessHours {
            start: self.business_hours_start,
            end: self.business_hours_end,
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.history_capacity == 0 {
            return Err(ValidationError::invalid_value(
                "history_capacity",
                "must be greater than 0",
            ));
        }
        if self.learning_capacity == 0 {
            return Err(ValidationError::invalid_value(
                "learning_capacity",
                "must be greater than 0",
            ));
        }
        if self.business_hours_start > 23 || self.business_hours_end > 23 {
            return Err(ValidationError::invalid_value(
                "business_hours",
                "hours must be 0-23",
            ));
        }
        if self.business_hours_start > self.business_hours_end {
            return Err(ValidationError::invalid_value(
                "business_hours",
                "start must not be after end",
            ));
        }
        Ok(())
    }
}
