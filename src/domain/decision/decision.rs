//! Decision - the immutable result of one engine invocation.

use serde::{Deserialize, Serialize};

use crate::domain::context::DecisionContext;
use crate::domain::foundation::{DecisionId, OptionId, Score, Timestamp};
use crate::domain::scoring::{ScoreBreakdown, ScoredOption};

/// One emitted decision. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    pub id: DecisionId,
    pub chosen: OptionId,
    pub confidence: Score,
    /// Deterministic, ordered reasoning lines.
    pub reasoning: Vec<String>,
    /// Up to two runner-up options, best first.
    pub alternatives: Vec<OptionId>,
    /// Per-factor scores for the winner, for auditability.
    pub winner_breakdown: ScoreBreakdown,
    /// The fully-derived context this decision was computed over.
    pub context: DecisionContext,
    pub processing_time_ms: f64,
    pub decided_at: Timestamp,
}

impl Decision {
    /// Assembles a decision from the pipeline stages.
    pub fn new(
        winner: ScoredOption,
        alternatives: Vec<ScoredOption>,
        confidence: Score,
        reasoning: Vec<String>,
        context: DecisionContext,
        processing_time_ms: f64,
        decided_at: Timestamp,
    ) -> Self {
        Self {
            id: DecisionId::new(),
            chosen: winner.option,
            confidence,
            reasoning,
            alternatives: alternatives.into_iter().map(|alt| alt.option).collect(),
            winner_breakdown: winner.breakdown,
            context,
            processing_time_ms,
            decided_at,
        }
    }
}
