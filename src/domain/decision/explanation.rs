//! Explanation generation - deterministic reasoning lines for a decision.

use crate::domain::context::DecisionContext;
use crate::domain::foundation::OptionId;
use crate::domain::patterns::UserPattern;
use crate::domain::scoring::context_relevance::COMPLEXITY_THRESHOLD;

/// Efficiency score below which assisted features are suggested.
const LOW_EFFICIENCY_THRESHOLD: f64 = 0.5;

/// Produces the ordered reasoning lines for a decision.
///
/// Always emits a role line and a view line; appends the complex-scenario
/// and low-efficiency lines when their conditions hold. No randomness,
/// no I/O.
pub fn explain(chosen: &OptionId, context: &DecisionContext, pattern: &UserPattern) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Selected '{}' based on {} role preferences",
            chosen, context.role
        ),
        format!("Tailored to the current '{}' view", context.current_view),
    ];

    if context.complexity.value() > COMPLEXITY_THRESHOLD {
        lines.push("Complex scenario detected, preferring a simplified option".to_string());
    }
    if pattern.efficiency_score.value() < LOW_EFFICIENCY_THRESHOLD {
        lines.push("Low efficiency score, recommending assisted features".to_string());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::context::{analyze, RawContext};
    use crate::domain::foundation::{Role, Score, Timestamp};

    fn option(name: &str) -> OptionId {
        OptionId::new(name).unwrap()
    }

    fn context(view: &str, actions: usize, duration: u64) -> DecisionContext {
        analyze(
            RawContext {
                role: Some(Role::Developer),
                current_view: Some(view.to_string()),
                recent_actions: (0..actions).map(|i| i.to_string()).collect(),
                session_duration_secs: Some(duration),
                ..RawContext::default()
            },
            Timestamp::from_unix_secs(1705320000),
        )
    }

    #[test]
    fn always_includes_role_and_view_lines() {
        let lines = explain(
            &option("code_analysis"),
            &context("editor", 0, 0),
            &UserPattern::default(),
        );

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("developer"));
        assert!(lines[0].contains("code_analysis"));
        assert!(lines[1].contains("editor"));
    }

    #[test]
    fn complex_scenario_adds_simplification_line() {
        let ctx = context("dashboard", 10, 3600);
        assert!(ctx.complexity.value() > COMPLEXITY_THRESHOLD);

        let lines = explain(&option("help"), &ctx, &UserPattern::default());

        assert_eq!(lines.len(), 3);
        assert!(lines[2].contains("Complex scenario"));
    }

    #[test]
    fn low_efficiency_adds_assistance_line() {
        let mut pattern = UserPattern::default();
        pattern.efficiency_score = Score::new(0.2);

        let lines = explain(&option("chat"), &context("chat", 0, 0), &pattern);

        assert_eq!(lines.len(), 3);
        assert!(lines[2].contains("assisted features"));
    }

    #[test]
    fn neutral_efficiency_adds_no_assistance_line() {
        // The default 0.5 sits exactly on the threshold and must not trigger.
        let lines = explain(
            &option("chat"),
            &context("chat", 0, 0),
            &UserPattern::default(),
        );
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn explanation_is_deterministic() {
        let ctx = context("dashboard", 10, 3600);
        let mut pattern = UserPattern::default();
        pattern.efficiency_score = Score::new(0.1);

        let first = explain(&option("help"), &ctx, &pattern);
        let second = explain(&option("help"), &ctx, &pattern);

        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }
}
