//! Scoring module - the four strategy scorers and their aggregation.
//!
//! Each scorer is a pure function from `(context, pattern, option)` to a
//! clamped [`Score`](crate::domain::foundation::Score). The aggregator
//! combines the four factors with fixed weights and selects a winner plus
//! ranked alternatives.

pub mod aggregator;
pub mod context_relevance;
pub mod pattern_affinity;
pub mod role_affinity;
pub mod tables;
pub mod temporal_relevance;

pub use aggregator::{select, ScoreBreakdown, ScoredOption, Selection, Weights, WEIGHTS};
pub use temporal_relevance::BusinessHours;
