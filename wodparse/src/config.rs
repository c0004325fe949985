//! Parser configuration.
//!
//! Every field has a default, so a config document only needs the keys it
//! changes:
//!
//! ```
//! use wodparse::config::ParserConfig;
//!
//! let config = ParserConfig::from_json_str(r#"{"suggestion_limit": 5}"#).unwrap();
//! assert_eq!(config.suggestion_limit, 5);
//! assert_eq!(config.exact_match_confidence, 90);
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, WodError},
    model::EntityCategory,
};

/// Maximum size of input to process (1MB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Section labels that start a new segment when they make up a whole line.
pub const DEFAULT_SECTION_HEADERS: &[&str] = &[
    "STRENGTH",
    "CONDITIONING",
    "COOL DOWN",
    "COOLDOWN",
    "WARM-UP",
    "WARMUP",
    "METCON",
    "SKILL",
    "SKILLS",
    "ACCESSORY",
    "ACCESSORIES",
    "FINISHER",
    "GYMNASTICS",
    "OLYMPIC LIFTING",
    "WEIGHTLIFTING",
    "MOBILITY",
    "BUY IN",
    "CASH OUT",
    "BENCHMARK",
    "WOD",
    "PART A",
    "PART B",
    "PART C",
    "PART D",
];

/// Section labels that mark a segment as shared by the gym community.
pub const DEFAULT_COMMUNITY_HEADERS: &[&str] =
    &["COMMUNITY", "COMMUNITY WOD", "GYM WOD", "BOX WOD"];

/// Tunable parser settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum number of near-miss names offered per segment.
    pub suggestion_limit: usize,
    /// Upper bound on character edits for a near-miss suggestion.
    pub max_edit_distance: usize,
    /// Confidence of an exact catalogue match.
    pub exact_match_confidence: u8,
    /// Confidence of a custom workout with a name, a body and a type signal.
    pub structured_custom_confidence: u8,
    /// Confidence contributed by each structural element of a weaker segment.
    pub partial_signal_confidence: u8,
    /// Category assigned to custom workouts without a community marker.
    pub default_custom_category: EntityCategory,
    /// Whole-line labels that split segments.
    pub section_headers: Vec<String>,
    /// Whole-line labels that split segments and mark them as community workouts.
    pub community_headers: Vec<String>,
    /// Shortest continuous effort classified as endurance, in minutes.
    pub endurance_min_minutes: u32,
    /// Inputs longer than this are rejected without parsing.
    pub max_input_bytes: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: 3,
            max_edit_distance: 2,
            exact_match_confidence: 90,
            structured_custom_confidence: 80,
            partial_signal_confidence: 20,
            default_custom_category: EntityCategory::CustomUser,
            section_headers: DEFAULT_SECTION_HEADERS.iter().map(|s| s.to_string()).collect(),
            community_headers: DEFAULT_COMMUNITY_HEADERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            endurance_min_minutes: 20,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl ParserConfig {
    /// Creates the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a JSON config document.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a YAML config document.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the per-segment suggestion cap.
    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    /// Sets the near-miss edit bound.
    pub fn with_max_edit_distance(mut self, distance: usize) -> Self {
        self.max_edit_distance = distance;
        self
    }

    /// Sets the category for unmarked custom workouts.
    pub fn with_default_custom_category(mut self, category: EntityCategory) -> Self {
        self.default_custom_category = category;
        self
    }

    /// Adds a section header label.
    pub fn with_section_header(mut self, label: impl Into<String>) -> Self {
        self.section_headers.push(label.into());
        self
    }

    /// Sets the input size limit.
    pub fn with_max_input_bytes(mut self, bytes: usize) -> Self {
        self.max_input_bytes = bytes;
        self
    }

    /// Checks that the settings are consistent.
    ///
    /// # Errors
    ///
    /// Returns `WodError::InvalidConfig` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.suggestion_limit == 0 {
            return Err(invalid("suggestion_limit must be at least 1"));
        }
        if self.exact_match_confidence > 100 {
            return Err(invalid("exact_match_confidence must be at most 100"));
        }
        if self.structured_custom_confidence >= self.exact_match_confidence {
            return Err(invalid(
                "structured_custom_confidence must be below exact_match_confidence",
            ));
        }
        if u32::from(self.partial_signal_confidence) * 2
            >= u32::from(self.structured_custom_confidence)
        {
            return Err(invalid(
                "partial_signal_confidence must be below half of structured_custom_confidence",
            ));
        }
        if !self.default_custom_category.is_custom() {
            return Err(invalid("default_custom_category must be a custom category"));
        }
        if self
            .section_headers
            .iter()
            .chain(&self.community_headers)
            .any(|h| h.trim().is_empty())
        {
            return Err(invalid("section header labels must not be blank"));
        }
        if self.max_input_bytes == 0 {
            return Err(invalid("max_input_bytes must be positive"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> WodError {
    WodError::InvalidConfig(message.to_string())
}
