//! Detail extraction: time caps, totals, barbell lifts and scoring notes.
//!
//! Every field is optional. Numbers that fail to parse or overflow leave the
//! field unset rather than producing an error.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::catalog::LiftDictionary;

/// `Time cap: 8 minutes`, `Cap: 12 mins`, `TC 17:00`, `Time cap - 90 sec`
static CAP_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:time\s*cap|cap|tc)\b\s*[:\-]?\s*(?:of\s+)?(?:(\d{1,3}):(\d{2})|(\d{1,4})\s*(minutes?|mins?|m|seconds?|secs?|s)?)\b",
    )
    .expect("valid cap label regex")
});

/// `20 minute cap`, `20-min time cap`
static MINUTE_CAP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{1,4})\s*-?\s*(?:minutes?|mins?)\s+(?:time\s+)?cap\b")
        .expect("valid minute cap regex")
});

/// `AMRAP 20 minutes`, `EMOM 10 min`
static DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{1,4})\s*(?:minutes?|mins?)\b").expect("valid duration regex")
});

static CAP_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:time\s*cap|cap)\b").expect("valid cap word regex"));

/// `Total reps: 150`, `Total: 5 rounds`
static TOTAL_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\btotal\s*(?:reps|rounds|calories|cals)?\s*[:\-]\s*(\d+)\b")
        .expect("valid total label regex")
});

/// `150 total reps`
static TOTAL_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d+)\s+total\s+(?:reps|rounds|calories|cals)\b")
        .expect("valid total suffix regex")
});

/// `5 rounds`, `3 RFT`
static ROUND_COUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d+)\s*(?:rounds?|rft)\b").expect("valid round count regex")
});

/// `Scoring: total reps`, `Score - time`
static SCORING_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^\s*scor(?:e|ing)\s*[:\-]\s*(.+?)\s*$").expect("valid scoring regex")
});

/// Details pulled from one segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentDetails {
    pub time_cap_seconds: Option<u32>,
    pub total_effort: Option<u32>,
    /// Canonical lift names in first-seen order.
    pub barbell_lifts: Vec<String>,
    pub scoring: Option<String>,
    /// Non-fatal notices, without the segment number.
    pub notices: Vec<String>,
}

impl SegmentDetails {
    /// The lift list, or `None` when no lifts were found.
    pub fn lifts(&self) -> Option<Vec<String>> {
        (!self.barbell_lifts.is_empty()).then(|| self.barbell_lifts.clone())
    }
}

/// Extracts [`SegmentDetails`] from segment text.
///
/// # Examples
///
/// ```
/// use wodparse::parser::DetailExtractor;
///
/// let text = "21-15-9 for time\nThrusters\nTime cap: 8 minutes";
/// let details = DetailExtractor::default().extract(text);
/// assert_eq!(details.time_cap_seconds, Some(480));
/// assert_eq!(details.barbell_lifts, vec!["Thruster"]);
/// ```
#[derive(Debug, Clone)]
pub struct DetailExtractor {
    lifts: LiftDictionary,
}

impl Default for DetailExtractor {
    fn default() -> Self {
        Self::new(LiftDictionary::builtin().clone())
    }
}

impl DetailExtractor {
    /// Creates an extractor using the given lift dictionary.
    pub fn new(lifts: LiftDictionary) -> Self {
        Self { lifts }
    }

    /// Extracts all details from `text`.
    pub fn extract(&self, text: &str) -> SegmentDetails {
        let mut details = SegmentDetails {
            time_cap_seconds: self.time_cap(text),
            total_effort: self.total_effort(text),
            barbell_lifts: self.lifts.find_all(text),
            scoring: self.scoring(text),
            notices: Vec::new(),
        };

        if details.time_cap_seconds.is_none() && CAP_WORD.is_match(text) {
            details.notices.push("time cap not recognized".to_string());
        }

        tracing::trace!(
            time_cap = ?details.time_cap_seconds,
            total_effort = ?details.total_effort,
            lifts = details.barbell_lifts.len(),
            "extracted details"
        );

        details
    }

    /// An explicit cap label wins, else the first `N minutes` duration.
    pub fn time_cap(&self, text: &str) -> Option<u32> {
        if let Some(caps) = CAP_LABEL.captures(text) {
            return cap_label_seconds(&caps);
        }
        if let Some(caps) = MINUTE_CAP.captures(text) {
            return minutes_to_seconds(&caps[1]);
        }
        DURATION
            .captures(text)
            .and_then(|caps| minutes_to_seconds(&caps[1]))
    }

    /// Explicitly stated totals only.
    pub fn total_effort(&self, text: &str) -> Option<u32> {
        [&*TOTAL_LABEL, &*TOTAL_SUFFIX, &*ROUND_COUNT]
            .iter()
            .find_map(|regex| regex.captures(text))
            .and_then(|caps| caps[1].parse().ok())
    }

    /// Text after a `Scoring:` or `Score:` label, verbatim.
    pub fn scoring(&self, text: &str) -> Option<String> {
        SCORING_LABEL
            .captures(text)
            .map(|caps| caps[1].to_string())
            .filter(|s| !s.is_empty())
    }
}

fn cap_label_seconds(caps: &Captures<'_>) -> Option<u32> {
    if let (Some(minutes), Some(seconds)) = (caps.get(1), caps.get(2)) {
        let minutes: u32 = minutes.as_str().parse().ok()?;
        let seconds: u32 = seconds.as_str().parse().ok()?;
        return minutes.checked_mul(60)?.checked_add(seconds);
    }

    let amount = caps.get(3)?.as_str();
    let in_seconds = caps
        .get(4)
        .is_some_and(|unit| unit.as_str().to_lowercase().starts_with('s'));

    if in_seconds {
        amount.parse().ok()
    } else {
        minutes_to_seconds(amount)
    }
}

fn minutes_to_seconds(amount: &str) -> Option<u32> {
    amount.parse::<u32>().ok()?.checked_mul(60)
}
