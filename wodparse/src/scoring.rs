//! Confidence scoring for parsed entities.
//!
//! The scores are coarse and fixed rather than computed from signal
//! strength:
//! - an exact catalogue match scores `exact_match_confidence` (90)
//! - a custom workout with a name, a body and a type signal scores
//!   `structured_custom_confidence` (80)
//! - anything weaker scores `partial_signal_confidence` (20) per element present

use crate::{config::ParserConfig, model::ParsedWorkoutEntity};

/// Structural elements found in a custom segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evidence {
    /// The segment has a title line or a section label.
    pub name: bool,
    /// The classifier found a type signal, not just the default.
    pub type_signal: bool,
    /// The segment has content beyond its title.
    pub body: bool,
}

impl Evidence {
    /// Number of elements present.
    #[inline]
    pub fn count(&self) -> u8 {
        u8::from(self.name) + u8::from(self.type_signal) + u8::from(self.body)
    }

    /// True when all three elements are present.
    #[inline]
    pub fn is_structured(&self) -> bool {
        self.name && self.type_signal && self.body
    }

    /// True when there is something besides a name to go on.
    #[inline]
    pub fn has_content(&self) -> bool {
        self.body || self.type_signal
    }
}

/// Scores a custom entity.
///
/// # Examples
///
/// ```
/// use wodparse::config::ParserConfig;
/// use wodparse::scoring::{custom_confidence, Evidence};
///
/// let config = ParserConfig::default();
/// let full = Evidence { name: true, type_signal: true, body: true };
/// assert_eq!(custom_confidence(&config, full), 80);
///
/// let untyped = Evidence { name: true, type_signal: false, body: true };
/// assert_eq!(custom_confidence(&config, untyped), 40);
/// ```
pub fn custom_confidence(config: &ParserConfig, evidence: Evidence) -> u8 {
    if evidence.is_structured() {
        return config.structured_custom_confidence;
    }

    config
        .partial_signal_confidence
        .saturating_mul(evidence.count())
        .min(100)
}

/// Overall confidence of a result: the best entity's score, or 0.
pub fn overall_confidence(entities: &[ParsedWorkoutEntity]) -> u8 {
    entities.iter().map(|e| e.confidence).max().unwrap_or(0)
}

/// Returns the best-scoring entity, earliest first on ties.
pub fn best_entity(entities: &[ParsedWorkoutEntity]) -> Option<&ParsedWorkoutEntity> {
    entities
        .iter()
        .rev()
        .max_by_key(|e| e.confidence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EntityCategory, WorkoutType};

    fn entity(name: &str, confidence: u8) -> ParsedWorkoutEntity {
        ParsedWorkoutEntity {
            name: name.to_string(),
            workout_description: "10 burpees".to_string(),
            workout_type: WorkoutType::ForTime,
            scoring: None,
            time_cap_seconds: None,
            total_effort: None,
            barbell_lifts: None,
            related_benchmark: None,
            category: EntityCategory::CustomUser,
            source_table: None,
            database_id: None,
            confidence,
        }
    }

    #[test]
    fn test_partial_evidence() {
        let config = ParserConfig::default();
        assert_eq!(custom_confidence(&config, Evidence::default()), 0);
        assert_eq!(
            custom_confidence(
                &config,
                Evidence {
                    name: false,
                    type_signal: true,
                    body: true
                }
            ),
            40
        );
        assert_eq!(
            custom_confidence(
                &config,
                Evidence {
                    name: false,
                    type_signal: false,
                    body: true
                }
            ),
            20
        );
    }

    #[test]
    fn test_structured_uses_configured_constant() {
        let mut config = ParserConfig::default();
        config.structured_custom_confidence = 75;
        let evidence = Evidence {
            name: true,
            type_signal: true,
            body: true,
        };
        assert_eq!(custom_confidence(&config, evidence), 75);
    }

    #[test]
    fn test_overall_confidence() {
        assert_eq!(overall_confidence(&[]), 0);
        let entities = vec![entity("a", 40), entity("b", 90), entity("c", 80)];
        assert_eq!(overall_confidence(&entities), 90);
    }

    #[test]
    fn test_best_entity_prefers_earliest_on_tie() {
        let entities = vec![entity("a", 80), entity("b", 80), entity("c", 20)];
        assert_eq!(best_entity(&entities).unwrap().name, "a");
        assert!(best_entity(&[]).is_none());
    }
}
