//! Adapters - concrete implementations of the ports.

mod clock;
mod file_storage;
mod in_memory_storage;
mod null_metrics;

pub use clock::{FixedClock, SystemClock};
pub use file_storage::FileStorage;
pub use in_memory_storage::InMemoryStorage;
pub use null_metrics::NullMetricsProvider;
