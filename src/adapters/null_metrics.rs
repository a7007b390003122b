//! Null metrics adapter - reports nothing rather than fake numbers.

use crate::ports::{MetricsProvider, PerformanceMetrics};

/// MetricsProvider for hosts without process metrics.
///
/// Always reports `None`; `status()` then carries no performance data
/// instead of fabricated values.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMetricsProvider;

impl NullMetricsProvider {
    pub fn new() -> Self {
        Self
    }
}

impl MetricsProvider for NullMetricsProvider {
    fn sample(&self) -> Option<PerformanceMetrics> {
        None
    }
}
