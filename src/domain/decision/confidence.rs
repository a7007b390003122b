//! Confidence estimation - blends context complexity with history.

use crate::domain::foundation::Score;

const BASE: f64 = 0.5;
const SIMPLICITY_WEIGHT: f64 = 0.2;
const HISTORY_WEIGHT: f64 = 0.3;

/// Estimates confidence in a chosen option.
///
/// Simpler contexts and a strong historical record for the option both
/// raise confidence. `historical_rate` comes from
/// [`DecisionHistory::success_rate`](super::DecisionHistory::success_rate).
pub fn estimate_confidence(complexity: Score, historical_rate: f64) -> Score {
    Score::new(
        BASE + complexity.complement().value() * SIMPLICITY_WEIGHT
            + historical_rate * HISTORY_WEIGHT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn cold_start_confidence_is_above_base() {
        // complexity 0.24, historical rate 0.5
        let confidence = estimate_confidence(Score::new(0.24), 0.5);
        assert!((confidence.value() - 0.802).abs() < 1e-9);
    }

    #[test]
    fn simpler_context_raises_confidence() {
        let simple = estimate_confidence(Score::new(0.1), 0.5);
        let complex = estimate_confidence(Score::new(0.9), 0.5);
        assert!(simple > complex);
    }

    #[test]
    fn stronger_history_raises_confidence() {
        let proven = estimate_confidence(Score::HALF, 0.9);
        let unproven = estimate_confidence(Score::HALF, 0.1);
        assert!(proven > unproven);
    }

    #[test]
    fn maximum_inputs_clamp_to_one() {
        let confidence = estimate_confidence(Score::ZERO, 1.0);
        assert_eq!(confidence.value(), 1.0);
    }

    proptest! {
        #[test]
        fn confidence_always_in_unit_interval(
            complexity in 0.0f64..=1.0,
            rate in 0.0f64..=1.0,
        ) {
            let confidence = estimate_confidence(Score::new(complexity), rate);
            prop_assert!(confidence.value() >= 0.0);
            prop_assert!(confidence.value() <= 1.0);
        }

        #[test]
        fn confidence_never_below_base_for_valid_inputs(
            complexity in 0.0f64..=1.0,
            rate in 0.0f64..=1.0,
        ) {
            let confidence = estimate_confidence(Score::new(complexity), rate);
            prop_assert!(confidence.value() >= 0.5);
        }
    }
}
