//! Interval and continuous-effort formats.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{SignalInput, TypeSignal};
use crate::model::WorkoutType;

static ROUNDS_OR_SETS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:rounds?|sets?|intervals?|efforts?)\b").expect("valid rounds regex")
});

static REST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\brest\b").expect("valid rest regex"));

/// `20s on / 10s off`, `40 on 20 off`
static ON_OFF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b\d+\s*(?:s|sec|secs|seconds?|m|min|mins|minutes?)?\s*on\s*[/,]?\s*\d+\s*(?:s|sec|secs|seconds?|m|min|mins|minutes?)?\s*off\b",
    )
    .expect("valid on/off regex")
});

static CONTINUOUS_EFFORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:row|rowing|run|running|jog|jogging|bike|biking|cycle|cycling|swim|swimming|ski|skierg|erg|walk|ruck|rucking|airdyne|assault\s+bike)\b",
    )
    .expect("valid continuous effort regex")
});

static DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{1,4})\s*(minutes?|mins?|hours?|hrs?)\b").expect("valid duration regex")
});

/// Rep counts and set notation rule out a continuous effort.
static REP_SCHEME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\breps?\b|\b\d+\s*[x×]\s*\d+\b|\b\d+(?:\s*-\s*\d+){2,}\b")
        .expect("valid rep scheme regex")
});

/// Fires on round or set structure combined with rest, or on/off notation.
#[derive(Debug, Clone, Default)]
pub struct IntervalSignal;

impl IntervalSignal {
    /// Creates a new interval signal.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl TypeSignal for IntervalSignal {
    fn name(&self) -> &'static str {
        "interval"
    }

    fn detect(&self, input: &SignalInput<'_>) -> Option<WorkoutType> {
        let rounds_with_rest = ROUNDS_OR_SETS.is_match(input.text) && REST.is_match(input.text);
        (rounds_with_rest || ON_OFF.is_match(input.text)).then_some(WorkoutType::Interval)
    }

    fn priority(&self) -> u8 {
        7
    }
}

/// Fires on a long single-modality effort with no rep scheme.
///
/// # Examples
///
/// ```
/// use wodparse::parser::signals::{EnduranceSignal, SignalInput, TypeSignal};
/// use wodparse::model::WorkoutType;
///
/// let signal = EnduranceSignal::new(20);
/// let input = SignalInput { text: "Run 45 minutes zone 2", body_lines: &[] };
/// assert_eq!(signal.detect(&input), Some(WorkoutType::Endurance));
/// ```
#[derive(Debug, Clone)]
pub struct EnduranceSignal {
    min_minutes: u32,
}

impl EnduranceSignal {
    /// Creates an endurance signal that needs at least `min_minutes` of work.
    #[inline]
    pub fn new(min_minutes: u32) -> Self {
        Self { min_minutes }
    }

    /// Longest stated duration in minutes.
    fn longest_minutes(&self, text: &str) -> Option<u32> {
        DURATION
            .captures_iter(text)
            .filter_map(|caps| {
                let amount: u32 = caps[1].parse().ok()?;
                if caps[2].to_lowercase().starts_with('h') {
                    amount.checked_mul(60)
                } else {
                    Some(amount)
                }
            })
            .max()
    }
}

impl TypeSignal for EnduranceSignal {
    fn name(&self) -> &'static str {
        "endurance"
    }

    fn detect(&self, input: &SignalInput<'_>) -> Option<WorkoutType> {
        if !CONTINUOUS_EFFORT.is_match(input.text) || REP_SCHEME.is_match(input.text) {
            return None;
        }
        if !input.movements().is_empty() {
            return None;
        }

        let minutes = self.longest_minutes(input.text)?;
        (minutes >= self.min_minutes).then_some(WorkoutType::Endurance)
    }

    fn priority(&self) -> u8 {
        8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(text: &str) -> SignalInput<'_> {
        SignalInput {
            text,
            body_lines: &[],
        }
    }

    #[test]
    fn test_rounds_with_rest() {
        let signal = IntervalSignal::new();
        assert_eq!(
            signal.detect(&input("5 rounds:\n500m row\nRest 2 minutes")),
            Some(WorkoutType::Interval)
        );
        assert_eq!(signal.detect(&input("5 rounds:\n500m row")), None);
    }

    #[test]
    fn test_on_off_notation() {
        let signal = IntervalSignal::new();
        assert_eq!(
            signal.detect(&input("Bike 40s on / 20s off")),
            Some(WorkoutType::Interval)
        );
        assert_eq!(
            signal.detect(&input("30 on 30 off x 10")),
            Some(WorkoutType::Interval)
        );
    }

    #[test]
    fn test_endurance_threshold() {
        let signal = EnduranceSignal::new(20);
        assert_eq!(signal.detect(&input("Row 20 min")), Some(WorkoutType::Endurance));
        assert_eq!(signal.detect(&input("Bike 1 hour easy")), Some(WorkoutType::Endurance));
        assert_eq!(signal.detect(&input("Run 15 minutes")), None);
        assert_eq!(signal.detect(&input("Row 30 minutes, then 50 reps burpees")), None);
        assert_eq!(signal.detect(&input("Stretch 30 minutes")), None);
    }

    #[test]
    fn test_endurance_respects_configured_minimum() {
        let signal = EnduranceSignal::new(45);
        assert_eq!(signal.detect(&input("Run 30 minutes")), None);
        assert_eq!(signal.detect(&input("Run 60 minutes")), Some(WorkoutType::Endurance));
    }
}
