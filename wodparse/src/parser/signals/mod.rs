//! Workout type classification.
//!
//! Each [`TypeSignal`] recognizes one family of formats. The classifier asks
//! them in priority order and the first one that fires decides the type.

mod for_time;
mod interval;
mod keyword;
mod strength;

pub use for_time::ForTimeSignal;
pub use interval::{EnduranceSignal, IntervalSignal};
pub use keyword::KeywordSignal;
pub use strength::StrengthSignal;

use once_cell::sync::Lazy;
use regex::Regex;

use super::segment::Segment;
use crate::{config::ParserConfig, model::WorkoutType};

/// `21 Thrusters`, `- 50 box jumps`, `10 x pull-ups`
static MOVEMENT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*(?:[-*•]\s*)?(\d{1,4})\s+(?:x\s+)?([a-z][a-z'\-]*(?:\s+[a-z][a-z'\-]*)*)",
    )
    .expect("valid movement line regex")
});

/// Leading words that make a numbered line something other than a movement.
const NON_MOVEMENT_WORDS: &[&str] = &[
    "round", "rounds", "rft", "min", "mins", "minute", "minutes", "sec", "secs", "second",
    "seconds", "sets", "set", "reps", "rep", "hour", "hours", "x",
];

/// The text a signal inspects.
#[derive(Debug, Clone)]
pub struct SignalInput<'a> {
    /// Full segment text.
    pub text: &'a str,
    /// Lines after the title.
    pub body_lines: &'a [String],
}

impl<'a> SignalInput<'a> {
    /// Builds the input for `segment`, borrowing `text` as its joined text.
    pub fn new(text: &'a str, segment: &'a Segment) -> Self {
        Self {
            text,
            body_lines: segment.body_lines(),
        }
    }

    /// Numbered movement lines as `(reps, movement)`, in order.
    pub fn movements(&self) -> Vec<(u32, String)> {
        self.body_lines
            .iter()
            .filter_map(|line| parse_movement(line))
            .collect()
    }
}

fn parse_movement(line: &str) -> Option<(u32, String)> {
    let caps = MOVEMENT_LINE.captures(line)?;
    let reps: u32 = caps[1].parse().ok()?;
    let movement = caps[2].trim().to_lowercase();

    let first_word = movement.split_whitespace().next()?;
    if NON_MOVEMENT_WORDS.contains(&first_word) {
        return None;
    }

    Some((reps, movement))
}

/// A rule that recognizes one family of workout formats.
pub trait TypeSignal: Send + Sync + std::fmt::Debug {
    /// Returns the name of this signal for debugging.
    fn name(&self) -> &'static str;

    /// Returns the workout type if this signal fires.
    fn detect(&self, input: &SignalInput<'_>) -> Option<WorkoutType>;

    /// Returns the priority of this signal.
    ///
    /// Lower values are asked first.
    fn priority(&self) -> u8;
}

/// The classifier's verdict for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub workout_type: WorkoutType,
    /// Name of the signal that fired, `None` for the default.
    pub signal: Option<&'static str>,
}

impl Classification {
    /// True when a signal fired rather than the for_time default.
    #[inline]
    pub fn has_signal(&self) -> bool {
        self.signal.is_some()
    }
}

/// Assigns exactly one [`WorkoutType`] to a segment.
///
/// # Examples
///
/// ```
/// use wodparse::parser::{Segmenter, TypeClassifier};
/// use wodparse::model::WorkoutType;
///
/// let segments = Segmenter::default().segment("Summer Sweat\nAMRAP 20 minutes:\n10 Burpees");
/// let verdict = TypeClassifier::default().classify(&segments[0]);
/// assert_eq!(verdict.workout_type, WorkoutType::Amrap);
/// ```
#[derive(Debug)]
pub struct TypeClassifier {
    /// Signals in priority order.
    signals: Vec<Box<dyn TypeSignal>>,
}

impl Default for TypeClassifier {
    fn default() -> Self {
        Self::new(&ParserConfig::default())
    }
}

impl TypeClassifier {
    /// Creates a classifier with the standard signals.
    ///
    /// Standard signals (in priority order):
    /// 1. AMRAP
    /// 2. EMOM
    /// 3. Tabata
    /// 4. For time, refined to chipper or ladder
    /// 5. Strength set notation
    /// 6. Unbroken
    /// 7. Round and rest notation
    /// 8. Long continuous effort
    pub fn new(config: &ParserConfig) -> Self {
        Self::with_signals(vec![
            Box::new(KeywordSignal::amrap()),
            Box::new(KeywordSignal::emom()),
            Box::new(KeywordSignal::tabata()),
            Box::new(ForTimeSignal::new()),
            Box::new(StrengthSignal::new()),
            Box::new(KeywordSignal::unbroken()),
            Box::new(IntervalSignal::new()),
            Box::new(EnduranceSignal::new(config.endurance_min_minutes)),
        ])
    }

    /// Creates a classifier with custom signals.
    ///
    /// Signals will be sorted by priority automatically.
    pub fn with_signals(mut signals: Vec<Box<dyn TypeSignal>>) -> Self {
        signals.sort_by_key(|s| s.priority());
        Self { signals }
    }

    /// Classifies a segment.
    pub fn classify(&self, segment: &Segment) -> Classification {
        let text = segment.text();
        let input = SignalInput::new(&text, segment);
        let verdict = self.classify_input(&input);

        tracing::debug!(
            segment = segment.index,
            workout_type = %verdict.workout_type,
            signal = verdict.signal.unwrap_or("default"),
            "classified segment"
        );

        verdict
    }

    /// Classifies prepared input. The first signal to fire wins.
    pub fn classify_input(&self, input: &SignalInput<'_>) -> Classification {
        for signal in &self.signals {
            if let Some(workout_type) = signal.detect(input) {
                return Classification {
                    workout_type,
                    signal: Some(signal.name()),
                };
            }
        }

        Classification {
            workout_type: WorkoutType::default(),
            signal: None,
        }
    }

    /// Returns the number of signals.
    #[inline]
    pub fn signal_count(&self) -> usize {
        self.signals.len()
    }

    /// Returns the names of all signals in priority order.
    pub fn signal_names(&self) -> Vec<&'static str> {
        self.signals.iter().map(|s| s.name()).collect()
    }
}
