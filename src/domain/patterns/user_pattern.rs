//! UserPattern - behavioral profile for one (user, role) pair.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::{OptionId, Role, Score, UserId};

/// Key a behavioral profile is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PatternKey {
    pub user_id: UserId,
    pub role: Role,
}

impl PatternKey {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }
}

/// Per-(user, role) behavioral profile.
///
/// Created with defaults on first read; mutated only by the learning loop;
/// never deleted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPattern {
    /// Options the user has interacted with, in deterministic order.
    pub preferred_options: BTreeSet<OptionId>,
    /// Running mean of observed session durations, in seconds.
    pub average_session_secs: f64,
    /// Named workflows the user runs repeatedly. Host-supplied labels.
    pub common_workflows: Vec<String>,
    /// How efficiently the user completes interactions, `[0,1]`.
    pub efficiency_score: Score,
    /// Number of interactions folded into this profile.
    pub interaction_count: u64,
}

impl Default for UserPattern {
    fn default() -> Self {
        Self {
            preferred_options: BTreeSet::new(),
            average_session_secs: 0.0,
            common_workflows: Vec::new(),
            efficiency_score: Score::HALF,
            interaction_count: 0,
        }
    }
}

impl UserPattern {
    /// Whether the option is among the user's observed preferences.
    pub fn prefers(&self, option: &OptionId) -> bool {
        self.preferred_options.contains(option)
    }

    /// Folds one interaction element into the profile.
    ///
    /// Adds the element to `preferred_options` when not already present
    /// and bumps the interaction count.
    pub fn absorb_interaction(&mut self, element: &OptionId) {
        if !self.preferred_options.contains(element) {
            self.preferred_options.insert(element.clone());
        }
        self.interaction_count += 1;
    }

    /// Folds an observed session duration into the running mean.
    pub fn absorb_session_duration(&mut self, duration_secs: u64) {
        let n = self.interaction_count.max(1) as f64;
        self.average_session_secs += (duration_secs as f64 - self.average_session_secs) / n;
    }

    /// Nudges the efficiency score toward the observed outcome.
    ///
    /// Exponential moving average so a single bad outcome does not erase
    /// an established profile.
    pub fn absorb_outcome(&mut self, success: bool) {
        let observed = if success { 1.0 } else { 0.0 };
        self.efficiency_score =
            Score::new(self.efficiency_score.value() * 0.9 + observed * 0.1);
    }
}
