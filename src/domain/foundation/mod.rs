//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the decision engine domain.

mod errors;
mod ids;
mod role;
mod score;
mod timestamp;

pub use errors::{EngineError, ValidationError};
pub use ids::{DecisionId, OptionId, UserId};
pub use role::Role;
pub use score::Score;
pub use timestamp::Timestamp;
