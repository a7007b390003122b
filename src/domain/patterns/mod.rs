//! Patterns module - per-user behavioral profiles and learned interaction data.
//!
//! Two stores live here:
//!
//! - **User patterns** - a profile per `(user, role)` pair, lazily created
//!   with defaults and mutated only by the learning loop.
//! - **Learning records** - aggregated interaction/outcome history keyed by
//!   a `(role, interaction kind, element)` signature, with bounded buffers
//!   and incremental frequency counters.

pub mod learning;
pub mod store;
pub mod user_pattern;

pub use learning::{Interaction, LearnedPatterns, LearningKey, LearningRecord, Outcome};
pub use store::UserPatternStore;
pub use user_pattern::{PatternKey, UserPattern};
