//! Metrics Port - Interface for host-supplied performance metrics.
//!
//! The engine does not measure CPU or memory itself; a host that wants
//! real numbers in `status()` implements this port. Adapters must report
//! `None` rather than fabricate values.

use serde::{Deserialize, Serialize};

/// Point-in-time process performance snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// CPU utilization, 0.0 to 100.0.
    pub cpu_percent: f64,
    /// Resident memory in bytes.
    pub memory_bytes: u64,
    /// Recent average host-observed response time in milliseconds.
    pub response_time_ms: f64,
}

/// Port for sampling host process metrics.
pub trait MetricsProvider: Send + Sync {
    /// Samples current metrics, or `None` when the host cannot provide them.
    fn sample(&self) -> Option<PerformanceMetrics>;
}
