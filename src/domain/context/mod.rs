//! Context module - raw session input and its normalized form.
//!
//! Hosts hand the engine a partially-populated [`RawContext`]; the
//! [`analyzer`] resolves defaults and derives hour-of-day and a
//! complexity score, producing an immutable [`DecisionContext`].

pub mod analyzer;

pub use analyzer::{analyze, view_complexity, DecisionContext, RawContext};
