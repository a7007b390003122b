//! PatternAffinityScorer - how well an option matches the user's history.

use crate::domain::context::DecisionContext;
use crate::domain::foundation::{OptionId, Score};
use crate::domain::patterns::UserPattern;

const PREFERRED_BASE: f64 = 0.8;
const UNSEEN_BASE: f64 = 0.3;
const EFFICIENCY_BONUS_WEIGHT: f64 = 0.2;

/// Scores an option by observed preference plus an efficiency bonus.
///
/// The base plus bonus cannot exceed 1.0 under the current ranges, but the
/// clamp stays in case either range changes.
pub fn score(_context: &DecisionContext, pattern: &UserPattern, option: &OptionId) -> Score {
    let base = if pattern.prefers(option) {
        PREFERRED_BASE
    } else {
        UNSEEN_BASE
    };
    Score::new(base + pattern.efficiency_score.value() * EFFICIENCY_BONUS_WEIGHT)
}
