//! DecisionHistory - append-only record of emitted decisions.

use std::collections::VecDeque;

use crate::domain::foundation::OptionId;

use super::Decision;

/// Historical success rate assumed before any data exists.
pub const COLD_START_RATE: f64 = 0.5;

/// Ordered sequence of emitted decisions, the sole source for
/// historical-success-rate lookups.
///
/// Ring-bounded so long-running processes do not grow without limit; the
/// oldest decisions fall off first.
#[derive(Debug, Clone)]
pub struct DecisionHistory {
    decisions: VecDeque<Decision>,
    capacity: usize,
}

impl DecisionHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            decisions: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Appends a decision, evicting the oldest past capacity.
    pub fn record(&mut self, decision: Decision) {
        self.decisions.push_back(decision);
        while self.decisions.len() > self.capacity {
            self.decisions.pop_front();
        }
    }

    /// Mean confidence of prior decisions that chose `option`.
    ///
    /// Defaults to [`COLD_START_RATE`] when the option has no history.
    pub fn success_rate(&self, option: &OptionId) -> f64 {
        let mut sum = 0.0;
        let mut count = 0usize;
        for decision in &self.decisions {
            if &decision.chosen == option {
                sum += decision.confidence.value();
                count += 1;
            }
        }
        if count == 0 {
            COLD_START_RATE
        } else {
            sum / count as f64
        }
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    /// Most recent decision, if any.
    pub fn latest(&self) -> Option<&Decision> {
        self.decisions.back()
    }
}
