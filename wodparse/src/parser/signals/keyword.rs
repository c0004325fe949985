//! Single-keyword formats.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{SignalInput, TypeSignal};
use crate::model::WorkoutType;

static AMRAP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bamrap\b|\bas\s+many\s+(?:rounds|reps)(?:\s+and\s+reps)?\s+as\s+possible\b")
        .expect("valid AMRAP regex")
});

static EMOM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:emom|e\d+mom)\b|\bevery\s+minute\s+on\s+the\s+minute\b")
        .expect("valid EMOM regex")
});

static TABATA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\btabata\b").expect("valid Tabata regex"));

static UNBROKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bunbroken\b").expect("valid unbroken regex"));

/// Fires when a keyword appears anywhere in the segment.
///
/// # Examples
///
/// ```
/// use wodparse::parser::signals::{KeywordSignal, TypeSignal};
///
/// let signal = KeywordSignal::emom();
/// assert_eq!(signal.name(), "emom");
/// assert_eq!(signal.priority(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct KeywordSignal {
    name: &'static str,
    priority: u8,
    pattern: &'static Regex,
    workout_type: WorkoutType,
}

impl KeywordSignal {
    /// `AMRAP` or "as many rounds as possible".
    pub fn amrap() -> Self {
        Self {
            name: "amrap",
            priority: 1,
            pattern: &AMRAP,
            workout_type: WorkoutType::Amrap,
        }
    }

    /// `EMOM`, `E2MOM` or "every minute on the minute".
    pub fn emom() -> Self {
        Self {
            name: "emom",
            priority: 2,
            pattern: &EMOM,
            workout_type: WorkoutType::Emom,
        }
    }

    pub fn tabata() -> Self {
        Self {
            name: "tabata",
            priority: 3,
            pattern: &TABATA,
            workout_type: WorkoutType::Tabata,
        }
    }

    pub fn unbroken() -> Self {
        Self {
            name: "unbroken",
            priority: 6,
            pattern: &UNBROKEN,
            workout_type: WorkoutType::Unbroken,
        }
    }
}

impl TypeSignal for KeywordSignal {
    fn name(&self) -> &'static str {
        self.name
    }

    fn detect(&self, input: &SignalInput<'_>) -> Option<WorkoutType> {
        self.pattern.is_match(input.text).then_some(self.workout_type)
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
