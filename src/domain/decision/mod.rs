//! Decision module - emitted decisions, their history, confidence, and
//! the human-readable reasoning behind them.

pub mod confidence;
pub mod decision;
pub mod explanation;
pub mod history;

pub use confidence::estimate_confidence;
pub use decision::Decision;
pub use explanation::explain;
pub use history::DecisionHistory;
