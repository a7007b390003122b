//! ContextRelevanceScorer - how well an option fits the current view.

use crate::domain::context::DecisionContext;
use crate::domain::foundation::{OptionId, Score};
use crate::domain::patterns::UserPattern;

use super::tables;

const BASE: f64 = 0.5;
const VIEW_BONUS: f64 = 0.3;
const SIMPLICITY_BONUS: f64 = 0.2;

/// Complexity above which simple options get a boost.
pub const COMPLEXITY_THRESHOLD: f64 = 0.7;

/// Scores an option by view relevance, boosting simple options when the
/// scenario is complex.
pub fn score(context: &DecisionContext, _pattern: &UserPattern, option: &OptionId) -> Score {
    let mut raw = BASE;
    if tables::relevant_to_view(&context.current_view, option.as_str()) {
        raw += VIEW_BONUS;
    }
    if context.complexity.value() > COMPLEXITY_THRESHOLD && tables::is_simple(option.as_str()) {
        raw += SIMPLICITY_BONUS;
    }
    Score::new(raw)
}
