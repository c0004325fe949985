//! Assembly of per-segment results into one response.

use crate::{
    error::SegmentDiagnostic,
    model::{MultiEntityParseResult, ParsedWorkoutEntity},
    scoring,
};

/// Diagnostic used when the input has no usable segment at all.
pub const NO_WORKOUT_ERROR: &str = "no workout content found";

/// How one segment was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The segment produced an entity.
    Entity(ParsedWorkoutEntity),
    /// The name was close to a benchmark but matched none.
    ///
    /// `candidate` is kept as a custom entity only when another segment
    /// produced an entity; otherwise the segment fails and `suggestions`
    /// reach the caller. A segment with no content beyond its name has no
    /// candidate and always fails.
    NearMiss {
        name: String,
        candidate: Option<ParsedWorkoutEntity>,
        suggestions: Vec<String>,
    },
    /// The segment could not be turned into an entity.
    Failed(String),
}

/// The analysis of one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentReport {
    /// 1-based segment position.
    pub segment: usize,
    pub resolution: Resolution,
    /// Non-fatal notices, reported only when the segment yields an entity.
    pub notices: Vec<SegmentDiagnostic>,
}

impl SegmentReport {
    /// Creates a report with no notices.
    pub fn new(segment: usize, resolution: Resolution) -> Self {
        Self {
            segment,
            resolution,
            notices: Vec::new(),
        }
    }

    /// Adds notices.
    pub fn with_notices(mut self, notices: Vec<SegmentDiagnostic>) -> Self {
        self.notices = notices;
        self
    }

    #[inline]
    fn is_entity(&self) -> bool {
        matches!(self.resolution, Resolution::Entity(_))
    }
}

/// Combines segment reports, in input order, into the final result.
///
/// # Examples
///
/// ```
/// use wodparse::parser::aggregate::{aggregate, Resolution, SegmentReport};
///
/// let result = aggregate(
///     vec![SegmentReport::new(1, Resolution::Failed("no workout content found".into()))],
///     None,
/// );
/// assert!(!result.success);
/// assert_eq!(result.errors, Some(vec!["segment 1: no workout content found".to_string()]));
/// ```
pub fn aggregate(
    reports: Vec<SegmentReport>,
    extracted_date: Option<String>,
) -> MultiEntityParseResult {
    let any_entity = reports.iter().any(SegmentReport::is_entity);

    let mut entities: Vec<ParsedWorkoutEntity> = Vec::new();
    let mut errors: Vec<String> = Vec::new();
    let mut suggested: Vec<String> = Vec::new();

    if reports.is_empty() {
        errors.push(NO_WORKOUT_ERROR.to_string());
    }

    for report in reports {
        let segment = report.segment;
        match report.resolution {
            Resolution::Entity(entity) => {
                entities.push(entity);
                errors.extend(report.notices.iter().map(ToString::to_string));
            }
            Resolution::NearMiss {
                name,
                candidate: Some(candidate),
                suggestions,
            } if any_entity => {
                let message = format!(
                    "'{name}' is not a known benchmark, kept as a custom workout (closest: {})",
                    suggestions.join(", ")
                );
                errors.push(SegmentDiagnostic::new(segment, message).to_string());
                errors.extend(report.notices.iter().map(ToString::to_string));
                entities.push(candidate);
            }
            Resolution::NearMiss {
                name, suggestions, ..
            } => {
                let message = format!(
                    "no benchmark named '{name}', did you mean {}?",
                    suggestions.join(" or ")
                );
                errors.push(SegmentDiagnostic::new(segment, message).to_string());
                for suggestion in suggestions {
                    if !suggested.contains(&suggestion) {
                        suggested.push(suggestion);
                    }
                }
            }
            Resolution::Failed(message) => {
                errors.push(SegmentDiagnostic::new(segment, message).to_string());
            }
        }
    }

    let workout_found = !entities.is_empty();
    let confidence = scoring::overall_confidence(&entities);

    if let Some(best) = scoring::best_entity(&entities) {
        tracing::debug!(
            entities = entities.len(),
            best = %best.name,
            confidence,
            "aggregated parse result"
        );
    } else {
        tracing::debug!(suggestions = suggested.len(), "no workout entity produced");
    }

    MultiEntityParseResult {
        success: workout_found,
        workout_found,
        workout_entities: entities,
        extracted_date,
        confidence,
        suggested_workouts: (!workout_found && !suggested.is_empty()).then_some(suggested),
        errors: (!errors.is_empty()).then_some(errors),
    }
}
