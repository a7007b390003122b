//! RoleAffinityScorer - how well an option matches the active role.

use crate::domain::context::DecisionContext;
use crate::domain::foundation::{OptionId, Score};
use crate::domain::patterns::UserPattern;

use super::tables;

/// Scores an option from the static per-role preference table, falling
/// back to the role-specific default for unlisted options.
pub fn score(context: &DecisionContext, _pattern: &UserPattern, option: &OptionId) -> Score {
    let raw = tables::role_preference(context.role, option.as_str())
        .unwrap_or_else(|| tables::role_default(context.role));
    Score::new(raw)
}
