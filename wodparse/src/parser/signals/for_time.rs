//! "For time" formats and their chipper and ladder refinements.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{SignalInput, TypeSignal};
use crate::model::WorkoutType;

static FOR_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bfor\s+time\b|\brft\b").expect("valid for time regex")
});

static ROUNDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\brounds?\b").expect("valid rounds regex"));

/// Fewest distinct movements in a chipper.
const CHIPPER_MIN_MOVEMENTS: usize = 5;

/// Fewest rep counts in a ladder.
const LADDER_MIN_STEPS: usize = 3;

/// Fires on "for time" and refines the type from the movement list.
///
/// A chipper is a long single pass through distinct movements whose rep
/// counts never go up. A ladder steps its rep counts by a constant amount.
#[derive(Debug, Clone, Default)]
pub struct ForTimeSignal;

impl ForTimeSignal {
    /// Creates a new for-time signal.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    fn refine(&self, input: &SignalInput<'_>) -> WorkoutType {
        let movements = input.movements();
        let reps: Vec<u32> = movements.iter().map(|(r, _)| *r).collect();

        if is_chipper(&movements) && !ROUNDS.is_match(input.text) {
            return WorkoutType::Chipper;
        }
        if is_ladder(&reps) {
            return WorkoutType::Ladder;
        }

        WorkoutType::ForTime
    }
}

fn is_chipper(movements: &[(u32, String)]) -> bool {
    let mut distinct: Vec<&str> = movements.iter().map(|(_, m)| m.as_str()).collect();
    distinct.sort_unstable();
    distinct.dedup();

    distinct.len() >= CHIPPER_MIN_MOVEMENTS && movements.windows(2).all(|w| w[1].0 <= w[0].0)
}

/// Strictly increasing or decreasing by a constant, non-zero step.
fn is_ladder(reps: &[u32]) -> bool {
    if reps.len() < LADDER_MIN_STEPS {
        return false;
    }

    let step = i64::from(reps[1]) - i64::from(reps[0]);
    step != 0
        && reps
            .windows(2)
            .all(|w| i64::from(w[1]) - i64::from(w[0]) == step)
}

impl TypeSignal for ForTimeSignal {
    fn name(&self) -> &'static str {
        "for_time"
    }

    fn detect(&self, input: &SignalInput<'_>) -> Option<WorkoutType> {
        if !FOR_TIME.is_match(input.text) {
            return None;
        }
        Some(self.refine(input))
    }

    fn priority(&self) -> u8 {
        4
    }
}
