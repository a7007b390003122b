//! UserPatternStore - lazy-default map of behavioral profiles.

use std::collections::HashMap;

use crate::domain::foundation::{OptionId, Role, UserId};

use super::{PatternKey, UserPattern};

/// Holds one [`UserPattern`] per `(user, role)` pair.
///
/// Missing keys always resolve to defaults; there are no error conditions.
/// The store itself is not synchronized - the engine owns it behind a lock.
#[derive(Debug, Clone, Default)]
pub struct UserPatternStore {
    patterns: HashMap<PatternKey, UserPattern>,
}

impl UserPatternStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored profile or a default for unseen keys.
    ///
    /// The default is not persisted until the first mutation, so repeated
    /// reads with no intervening learning are idempotent.
    pub fn get(&self, user_id: &UserId, role: Role) -> UserPattern {
        let key = PatternKey::new(user_id.clone(), role);
        self.patterns.get(&key).cloned().unwrap_or_default()
    }

    /// Folds an interaction element into the profile, creating it on demand.
    pub fn update(&mut self, user_id: &UserId, role: Role, element: &OptionId) {
        let key = PatternKey::new(user_id.clone(), role);
        self.patterns
            .entry(key)
            .or_default()
            .absorb_interaction(element);
    }

    /// Folds an observed session duration into the profile's running mean.
    pub fn record_session(&mut self, user_id: &UserId, role: Role, duration_secs: u64) {
        let key = PatternKey::new(user_id.clone(), role);
        self.patterns
            .entry(key)
            .or_default()
            .absorb_session_duration(duration_secs);
    }

    /// Folds an interaction outcome into the profile's efficiency score.
    pub fn record_outcome(&mut self, user_id: &UserId, role: Role, success: bool) {
        let key = PatternKey::new(user_id.clone(), role);
        self.patterns.entry(key).or_default().absorb_outcome(success);
    }

    /// Number of materialized profiles.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Snapshot of all entries, for persistence.
    pub fn entries(&self) -> Vec<(PatternKey, UserPattern)> {
        self.patterns
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Rebuilds the store from persisted entries.
    pub fn from_entries(entries: Vec<(PatternKey, UserPattern)>) -> Self {
        Self {
            patterns: entries.into_iter().collect(),
        }
    }
}
