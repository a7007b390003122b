//! Clock Port - Interface for reading the current time.
//!
//! Injecting the clock keeps hour-of-day scoring and decision timestamps
//! deterministic under test.

use crate::domain::foundation::Timestamp;

/// Port for obtaining the current moment.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> Timestamp;
}
