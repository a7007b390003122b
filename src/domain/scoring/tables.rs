//! Static preference, relevance, and tag tables backing the scorers.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

use crate::domain::foundation::Role;

/// Per-role preference weights for well-known options.
static ROLE_PREFERENCES: Lazy<HashMap<Role, HashMap<&'static str, f64>>> = Lazy::new(|| {
    let mut prefs = HashMap::new();

    prefs.insert(
        Role::Admin,
        HashMap::from([
            ("monitoring", 0.9),
            ("user_management", 0.8),
            ("system_settings", 0.8),
            ("reports", 0.7),
            ("audit_log", 0.6),
        ]),
    );
    prefs.insert(
        Role::Developer,
        HashMap::from([
            ("code_analysis", 0.9),
            ("claude_review", 0.8),
            ("debugging", 0.8),
            ("repository_browser", 0.7),
            ("terminal", 0.7),
        ]),
    );
    prefs.insert(
        Role::User,
        HashMap::from([("chat", 0.8), ("simple_view", 0.7), ("help", 0.6)]),
    );

    prefs
});

/// Options considered relevant while a given view is active.
static VIEW_RELEVANCE: Lazy<HashMap<&'static str, HashSet<&'static str>>> = Lazy::new(|| {
    HashMap::from([
        (
            "editor",
            HashSet::from(["code_analysis", "claude_review", "debugging", "terminal"]),
        ),
        (
            "dashboard",
            HashSet::from(["monitoring", "reports", "audit_log"]),
        ),
        ("settings", HashSet::from(["system_settings", "user_management"])),
        ("chat", HashSet::from(["chat", "help"])),
        (
            "repository",
            HashSet::from(["repository_browser", "code_analysis"]),
        ),
    ])
});

/// Options that stay useful when the scenario gets complex.
static SIMPLE_OPTIONS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["chat", "help", "simple_view"]));

/// Options that speed up focused work.
static EFFICIENCY_TOOLS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "code_analysis",
        "claude_review",
        "debugging",
        "monitoring",
        "terminal",
    ])
});

/// Looks up the preference weight of an option for a role.
pub fn role_preference(role: Role, option: &str) -> Option<f64> {
    ROLE_PREFERENCES
        .get(&role)
        .and_then(|table| table.get(option))
        .copied()
}

/// Fallback preference applied to options a role's table does not list.
pub fn role_default(role: Role) -> f64 {
    match role {
        Role::Admin => 0.3,
        Role::Developer => 0.4,
        Role::User => 0.5,
    }
}

/// Whether the option is relevant to the given view.
pub fn relevant_to_view(view: &str, option: &str) -> bool {
    VIEW_RELEVANCE
        .get(view)
        .map(|options| options.contains(option))
        .unwrap_or(false)
}

/// Whether the option is tagged as simple.
pub fn is_simple(option: &str) -> bool {
    SIMPLE_OPTIONS.contains(option)
}

/// Whether the option is tagged as an efficiency tool.
pub fn is_efficiency_tool(option: &str) -> bool {
    EFFICIENCY_TOOLS.contains(option)
}
