//! TemporalRelevanceScorer - how well an option fits the time of day.

use serde::{Deserialize, Serialize};

use crate::domain::context::DecisionContext;
use crate::domain::foundation::{OptionId, Score};
use crate::domain::patterns::UserPattern;

use super::tables;

const BASE: f64 = 0.5;
const TIME_BONUS: f64 = 0.2;

/// Inclusive hour window treated as business hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    pub start: u32,
    pub end: u32,
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self { start: 9, end: 17 }
    }
}

impl BusinessHours {
    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.start && hour <= self.end
    }
}

/// Scores an option by time of day: efficiency tools during business hours,
/// simple options outside them. The maximum is 0.7; the clamp is applied
/// uniformly with the other scorers anyway.
pub fn score(
    context: &DecisionContext,
    _pattern: &UserPattern,
    option: &OptionId,
    hours: BusinessHours,
) -> Score {
    let mut raw = BASE;
    if hours.contains(context.hour_of_day) {
        if tables::is_efficiency_tool(option.as_str()) {
            raw += TIME_BONUS;
        }
    } else if tables::is_simple(option.as_str()) {
        raw += TIME_BONUS;
    }
    Score::new(raw)
}
