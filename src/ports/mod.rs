//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the engine and the outside world. Adapters implement these ports.
//!
//! - `Storage` - opaque byte persistence for engine state
//! - `Clock` - source of the current time
//! - `MetricsProvider` - host-supplied process performance metrics

mod clock;
mod metrics;
mod storage;

pub use clock::Clock;
pub use metrics::{MetricsProvider, PerformanceMetrics};
pub use storage::{Storage, StorageError};
