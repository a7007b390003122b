//! Learning records - aggregated interaction/outcome history per signature.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::fmt;

use crate::domain::foundation::{OptionId, Role, Timestamp, UserId};

/// One observed user interaction, as reported by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub user_id: UserId,
    pub role: Role,
    /// Kind of interaction, e.g. "click", "command", "navigation".
    pub kind: String,
    /// The option/feature the interaction targeted. Hosts sometimes omit
    /// this; such interactions cannot be attributed and are dropped.
    pub element: Option<OptionId>,
    /// Session duration at the time of the interaction, when known.
    pub session_duration_secs: Option<u64>,
    pub occurred_at: Timestamp,
}

/// Observed outcome of an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub success: bool,
    /// How long the interaction took end to end, when measured.
    pub duration_ms: Option<u64>,
}

/// Signature a learning record is keyed by: `(role, kind, element)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LearningKey(String);

impl LearningKey {
    /// Derives the signature for an attributable interaction.
    pub fn derive(role: Role, kind: &str, element: &OptionId) -> Self {
        Self(format!("{}:{}:{}", role, kind, element))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LearningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Aggregates derived from the interaction stream.
///
/// Counters are maintained incrementally; nothing here is recomputed from
/// the stored interaction list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LearnedPatterns {
    /// How often each element was interacted with.
    pub frequency: HashMap<String, u64>,
    /// Most recent elements in arrival order, bounded like the buffers.
    pub recent_sequence: VecDeque<String>,
    /// Running mean of the gap between consecutive interactions, seconds.
    pub mean_interval_secs: f64,
    /// When the last interaction under this key was observed.
    pub last_seen: Option<Timestamp>,
}

/// Interaction/outcome history for one [`LearningKey`].
///
/// Buffers are ring-bounded so long-running processes do not grow without
/// limit; the oldest entries fall off first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LearningRecord {
    pub interactions: VecDeque<Interaction>,
    pub outcomes: VecDeque<Outcome>,
    pub patterns: LearnedPatterns,
    /// Interactions ever recorded, including ones evicted from the buffer.
    pub total_recorded: u64,
    pub success_count: u64,
}

impl LearningRecord {
    /// Appends one interaction/outcome pair, updating all aggregates.
    ///
    /// `capacity` bounds the interaction/outcome/sequence buffers.
    pub fn record(&mut self, interaction: Interaction, outcome: Outcome, capacity: usize) {
        if let Some(element) = &interaction.element {
            *self
                .patterns
                .frequency
                .entry(element.as_str().to_string())
                .or_insert(0) += 1;

            self.patterns
                .recent_sequence
                .push_back(element.as_str().to_string());
            while self.patterns.recent_sequence.len() > capacity {
                self.patterns.recent_sequence.pop_front();
            }
        }

        if let Some(last) = self.patterns.last_seen {
            let gap = interaction
                .occurred_at
                .duration_since(&last)
                .num_seconds()
                .max(0) as f64;
            let n = self.total_recorded.max(1) as f64;
            self.patterns.mean_interval_secs +=
                (gap - self.patterns.mean_interval_secs) / n;
        }
        self.patterns.last_seen = Some(interaction.occurred_at);

        if outcome.success {
            self.success_count += 1;
        }
        self.total_recorded += 1;

        self.interactions.push_back(interaction);
        while self.interactions.len() > capacity {
            self.interactions.pop_front();
        }
        self.outcomes.push_back(outcome);
        while self.outcomes.len() > capacity {
            self.outcomes.pop_front();
        }
    }

    /// Fraction of recorded outcomes that succeeded; 0.0 before any data.
    pub fn success_ratio(&self) -> f64 {
        if self.total_recorded == 0 {
            return 0.0;
        }
        self.success_count as f64 / self.total_recorded as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interaction(element: &str, at_secs: u64) -> Interaction {
        Interaction {
            user_id: UserId::new("u1").unwrap(),
            role: Role::Developer,
            kind: "click".to_string(),
            element: Some(OptionId::new(element).unwrap()),
            session_duration_secs: None,
            occurred_at: Timestamp::from_unix_secs(at_secs),
        }
    }

    fn ok() -> Outcome {
        Outcome {
            success: true,
            duration_ms: Some(12),
        }
    }

    #[test]
    fn learning_key_combines_role_kind_and_element() {
        let key = LearningKey::derive(
            Role::Developer,
            "click",
            &OptionId::new("code_analysis").unwrap(),
        );
        assert_eq!(key.as_str(), "developer:click:code_analysis");
    }

    #[test]
    fn record_increments_frequency_incrementally() {
        let mut record = LearningRecord::default();

        record.record(interaction("code_analysis", 1000), ok(), 8);
        record.record(interaction("code_analysis", 1010), ok(), 8);
        record.record(interaction("chat", 1020), ok(), 8);

        assert_eq!(record.patterns.frequency["code_analysis"], 2);
        assert_eq!(record.patterns.frequency["chat"], 1);
        assert_eq!(record.total_recorded, 3);
    }

    #[test]
    fn record_bounds_buffers_at_capacity() {
        let mut record = LearningRecord::default();

        for i in 0..10 {
            record.record(interaction("chat", 1000 + i), ok(), 4);
        }

        assert_eq!(record.interactions.len(), 4);
        assert_eq!(record.outcomes.len(), 4);
        assert_eq!(record.patterns.recent_sequence.len(), 4);
        // Counters keep counting past eviction.
        assert_eq!(record.total_recorded, 10);
        assert_eq!(record.patterns.frequency["chat"], 10);
    }

    #[test]
    fn record_tracks_mean_interval() {
        let mut record = LearningRecord::default();

        record.record(interaction("chat", 1000), ok(), 8);
        record.record(interaction("chat", 1060), ok(), 8);
        record.record(interaction("chat", 1120), ok(), 8);

        assert!((record.patterns.mean_interval_secs - 60.0).abs() < 1.0);
        assert_eq!(
            record.patterns.last_seen,
            Some(Timestamp::from_unix_secs(1120))
        );
    }

    #[test]
    fn success_ratio_reflects_outcomes() {
        let mut record = LearningRecord::default();
        assert_eq!(record.success_ratio(), 0.0);

        record.record(interaction("chat", 1000), ok(), 8);
        record.record(
            interaction("chat", 1010),
            Outcome {
                success: false,
                duration_ms: None,
            },
            8,
        );

        assert!((record.success_ratio() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn record_without_element_still_counts_outcome() {
        let mut record = LearningRecord::default();
        let mut no_element = interaction("chat", 1000);
        no_element.element = None;

        record.record(no_element, ok(), 8);

        assert!(record.patterns.frequency.is_empty());
        assert_eq!(record.total_recorded, 1);
    }
}
