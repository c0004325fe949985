//! Strength set notation.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{SignalInput, TypeSignal};
use crate::model::WorkoutType;

/// `5 x 3`, `5x5`, `@ 85%`, `3RM`
static SET_NOTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b\d+\s*[x×]\s*\d+\b|@\s*\d+(?:\.\d+)?\s*%|\b\d+\s*rm\b")
        .expect("valid set notation regex")
});

/// `5-5-3-3-1-1`, `21-15-9`
static DASH_SCHEME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d+(?:\s*-\s*\d+){2,}\b").expect("valid dash scheme regex")
});

/// Heaviest rep count per set in a dash scheme read as strength work.
const MAX_STRENGTH_REPS: u32 = 10;

/// True if some dash scheme in `text` only has low-rep sets.
fn low_rep_scheme(text: &str) -> bool {
    DASH_SCHEME.find_iter(text).any(|m| {
        m.as_str()
            .split('-')
            .map(|n| n.trim().parse::<u32>())
            .all(|n| matches!(n, Ok(reps) if (1..=MAX_STRENGTH_REPS).contains(&reps)))
    })
}

/// Fires on set, percentage and max notation, or on a low-rep dash scheme.
///
/// `21-15-9` style couplet schemes are left to the other signals.
#[derive(Debug, Clone, Default)]
pub struct StrengthSignal;

impl StrengthSignal {
    /// Creates a new strength signal.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl TypeSignal for StrengthSignal {
    fn name(&self) -> &'static str {
        "strength"
    }

    fn detect(&self, input: &SignalInput<'_>) -> Option<WorkoutType> {
        (SET_NOTATION.is_match(input.text) || low_rep_scheme(input.text))
            .then_some(WorkoutType::Strength)
    }

    fn priority(&self) -> u8 {
        5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> Option<WorkoutType> {
        StrengthSignal::new().detect(&SignalInput {
            text,
            body_lines: &[],
        })
    }

    #[test]
    fn test_set_notations() {
        for text in [
            "Back Squat 5-5-3-3-1-1",
            "Deadlift 5 x 3",
            "Front squat 5x5",
            "Bench 3×8",
            "Power clean @ 85%",
            "Build to a heavy 1RM snatch",
        ] {
            assert_eq!(detect(text), Some(WorkoutType::Strength), "{text}");
        }
    }

    #[test]
    fn test_plain_reps_are_not_strength() {
        assert_eq!(detect("10 burpees\n15 KB swings"), None);
        assert_eq!(detect("Run 400m"), None);
    }

    #[test]
    fn test_high_rep_dash_schemes_are_not_strength() {
        assert_eq!(detect("21-15-9\nThrusters\nPull-ups"), None);
        assert_eq!(detect("50-40-30-20-10\nDouble-unders\nSit-ups"), None);
        assert_eq!(detect("Logged 2025-06-27"), None);
        assert_eq!(detect("Bench 5-3-1"), Some(WorkoutType::Strength));
        assert_eq!(detect("Press 5 - 5 - 5"), Some(WorkoutType::Strength));
    }
}
