//! Aggregator/Selector - weighted combination of the four strategy scorers.

use serde::{Deserialize, Serialize};

use crate::domain::context::DecisionContext;
use crate::domain::foundation::{EngineError, OptionId, Score};
use crate::domain::patterns::UserPattern;

use super::temporal_relevance::BusinessHours;
use super::{context_relevance, pattern_affinity, role_affinity, temporal_relevance};

/// How many runner-up options a selection reports.
const MAX_ALTERNATIVES: usize = 2;

/// Fixed weights for the four scoring factors. Must sum to exactly 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub role: f64,
    pub pattern: f64,
    pub context: f64,
    pub temporal: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.role + self.pattern + self.context + self.temporal
    }
}

pub const WEIGHTS: Weights = Weights {
    role: 0.30,
    pattern: 0.30,
    context: 0.25,
    temporal: 0.15,
};

/// Per-factor scores for one option, kept for auditability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub role: Score,
    pub pattern: Score,
    pub context: Score,
    pub temporal: Score,
    pub total: f64,
}

/// A candidate option with its full score breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredOption {
    pub option: OptionId,
    pub breakdown: ScoreBreakdown,
}

/// Outcome of aggregation: the winner and up to two ranked alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub winner: ScoredOption,
    pub alternatives: Vec<ScoredOption>,
}

fn score_option(
    context: &DecisionContext,
    pattern: &UserPattern,
    option: &OptionId,
    hours: BusinessHours,
) -> ScoreBreakdown {
    let role = role_affinity::score(context, pattern, option);
    let pattern_score = pattern_affinity::score(context, pattern, option);
    let ctx = context_relevance::score(context, pattern, option);
    let temporal = temporal_relevance::score(context, pattern, option, hours);

    ScoreBreakdown {
        role,
        pattern: pattern_score,
        context: ctx,
        temporal,
        total: WEIGHTS.role * role.value()
            + WEIGHTS.pattern * pattern_score.value()
            + WEIGHTS.context * ctx.value()
            + WEIGHTS.temporal * temporal.value(),
    }
}

/// Scores every candidate and picks the winner plus ranked alternatives.
///
/// Tie-break contract: equal totals preserve the candidate-list order, so
/// the first-listed option wins. Alternatives are the next options by
/// descending total (list order for ties), never including the winner.
pub fn select(
    context: &DecisionContext,
    pattern: &UserPattern,
    candidates: &[OptionId],
    hours: BusinessHours,
) -> Result<Selection, EngineError> {
    if candidates.is_empty() {
        return Err(EngineError::EmptyCandidateList);
    }

    let scored: Vec<ScoredOption> = candidates
        .iter()
        .map(|option| ScoredOption {
            option: option.clone(),
            breakdown: score_option(context, pattern, option, hours),
        })
        .collect();

    let mut winner_idx = 0;
    for (idx, entry) in scored.iter().enumerate().skip(1) {
        // Strictly greater keeps the first-listed option on ties.
        if entry.breakdown.total > scored[winner_idx].breakdown.total {
            winner_idx = idx;
        }
    }

    let winner = scored[winner_idx].clone();
    let mut rest: Vec<ScoredOption> = scored
        .into_iter()
        .enumerate()
        .filter(|(idx, _)| *idx != winner_idx)
        .map(|(_, entry)| entry)
        .collect();
    // Stable sort keeps list order among equal totals.
    rest.sort_by(|a, b| b.breakdown.total.total_cmp(&a.breakdown.total));
    rest.truncate(MAX_ALTERNATIVES);

    Ok(Selection {
        winner,
        alternatives: rest,
    })
}
