//! Context Analyzer - normalizes raw session input into a complete context.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Role, Score, Timestamp, UserId};

/// Weight of the recent-action count in the complexity score.
const ACTION_WEIGHT: f64 = 0.3;
/// Weight of the session duration in the complexity score.
const DURATION_WEIGHT: f64 = 0.3;
/// Weight of the current view in the complexity score.
const VIEW_WEIGHT: f64 = 0.4;

/// Action count at which the action factor saturates.
const ACTION_SATURATION: usize = 10;
/// Session duration (seconds) at which the duration factor saturates.
const DURATION_SATURATION_SECS: u64 = 3600;

/// Partially-populated session context as supplied by the host.
///
/// Every field the host may not know is optional; the analyzer resolves
/// defaults (anonymous user, `Role::User`, the `"unknown"` view, zero
/// duration).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawContext {
    pub user_id: Option<UserId>,
    pub role: Option<Role>,
    pub current_view: Option<String>,
    #[serde(default)]
    pub recent_actions: Vec<String>,
    pub session_duration_secs: Option<u64>,
}

/// Fully-populated context a single decision is computed over.
///
/// Immutable once built; produced fresh per decision call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionContext {
    pub user_id: UserId,
    pub role: Role,
    pub current_view: String,
    pub recent_actions: Vec<String>,
    pub session_duration_secs: u64,
    pub hour_of_day: u32,
    pub complexity: Score,
}

/// Static complexity weighting per view. Unknown views score 0.5.
pub fn view_complexity(view: &str) -> f64 {
    match view {
        "dashboard" => 0.8,
        "settings" => 0.7,
        "editor" => 0.6,
        "repository" => 0.5,
        "chat" => 0.4,
        _ => 0.5,
    }
}

/// Normalizes a raw context into a [`DecisionContext`].
///
/// Pure: the only external input is the moment the decision is being made,
/// which the caller obtains from its injected clock.
pub fn analyze(raw: RawContext, now: Timestamp) -> DecisionContext {
    let user_id = raw.user_id.unwrap_or_else(UserId::anonymous);
    let role = raw.role.unwrap_or_default();
    let current_view = raw.current_view.unwrap_or_else(|| "unknown".to_string());
    let session_duration_secs = raw.session_duration_secs.unwrap_or(0);

    let action_factor =
        raw.recent_actions.len().min(ACTION_SATURATION) as f64 / ACTION_SATURATION as f64;
    let duration_factor = session_duration_secs.min(DURATION_SATURATION_SECS) as f64
        / DURATION_SATURATION_SECS as f64;
    let complexity = Score::new(
        ACTION_WEIGHT * action_factor
            + DURATION_WEIGHT * duration_factor
            + VIEW_WEIGHT * view_complexity(&current_view),
    );

    DecisionContext {
        user_id,
        role,
        current_view,
        recent_actions: raw.recent_actions,
        session_duration_secs,
        hour_of_day: now.hour_of_day(),
        complexity,
    }
}
