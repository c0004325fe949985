//! Parser module that coordinates the pipeline stages.
//!
//! Text flows one way through the stages:
//! 1. [`Segmenter`] splits the input into candidate workout sections
//! 2. [`DateExtractor`] finds the date once for the whole input
//! 3. [`BenchmarkMatcher`] compares each section's name with the catalogue
//! 4. [`TypeClassifier`] assigns the workout type
//! 5. [`DetailExtractor`] pulls time caps, totals, lifts and scoring
//! 6. [`aggregate`](aggregate::aggregate) builds the response

pub mod aggregate;
mod date;
mod details;
mod matcher;
pub mod normalize;
mod segment;
pub mod signals;

use std::sync::Arc;

pub use date::DateExtractor;
pub use details::{DetailExtractor, SegmentDetails};
pub use matcher::{BenchmarkMatcher, MatchOutcome, Suggestion};
pub use segment::{looks_like_title, Segment, Segmenter};
pub use signals::{Classification, TypeClassifier, TypeSignal};

use self::{
    aggregate::{Resolution, SegmentReport, NO_WORKOUT_ERROR},
    normalize::{clean_title, remove_invisible_chars},
};
use crate::{
    catalog::{BenchmarkCatalog, BenchmarkSource, BenchmarkWorkout, LiftDictionary},
    config::ParserConfig,
    error::{Result, SegmentDiagnostic},
    model::{
        EntityCategory, MultiEntityParseResult, ParseRequest, ParsedWorkoutEntity, WorkoutType,
    },
    scoring::{self, Evidence},
};

/// Turns pasted workout text into structured workout entities.
///
/// The parser holds only read-only state: the catalogue, the configuration
/// and the compiled stages. One instance can serve any number of threads.
///
/// # Examples
///
/// ```
/// use wodparse::model::{EntityCategory, WorkoutType};
/// use wodparse::parser::WorkoutParser;
///
/// let parser = WorkoutParser::default();
/// let result = parser.parse_text("Fran\n21-15-9 reps for time of:\nThrusters\nPull-ups");
///
/// assert!(result.workout_found);
/// let fran = &result.workout_entities[0];
/// assert_eq!(fran.category, EntityCategory::Girls);
/// assert_eq!(fran.workout_type, WorkoutType::ForTime);
/// ```
#[derive(Debug)]
pub struct WorkoutParser {
    catalog: Arc<dyn BenchmarkSource>,
    config: ParserConfig,
    segmenter: Segmenter,
    dates: DateExtractor,
    matcher: BenchmarkMatcher,
    classifier: TypeClassifier,
    details: DetailExtractor,
}

impl Default for WorkoutParser {
    fn default() -> Self {
        Self::from_parts(BenchmarkCatalog::builtin(), ParserConfig::default())
    }
}

impl WorkoutParser {
    /// Creates a parser over `catalog`.
    ///
    /// # Errors
    ///
    /// Returns `WodError::InvalidConfig` if `config` fails validation.
    pub fn new(catalog: Arc<dyn BenchmarkSource>, config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(catalog, config))
    }

    fn from_parts(catalog: Arc<dyn BenchmarkSource>, config: ParserConfig) -> Self {
        Self {
            segmenter: Segmenter::new(&config).with_catalog(Arc::clone(&catalog)),
            dates: DateExtractor::new(),
            matcher: BenchmarkMatcher::new(&config),
            classifier: TypeClassifier::new(&config),
            details: DetailExtractor::default(),
            catalog,
            config,
        }
    }

    /// Replaces the type classifier.
    pub fn with_classifier(mut self, classifier: TypeClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Replaces the barbell lift dictionary.
    pub fn with_lifts(mut self, lifts: LiftDictionary) -> Self {
        self.details = DetailExtractor::new(lifts);
        self
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a request from the calling service.
    pub fn parse(&self, request: &ParseRequest) -> MultiEntityParseResult {
        let span = tracing::debug_span!(
            "parse_workouts",
            user = %request.requesting_user_id,
            bytes = request.raw_text.len()
        );
        let _enter = span.enter();

        self.parse_text(&request.raw_text)
    }

    /// Parses raw text.
    ///
    /// Never fails: problems with the text are reported inside the result.
    pub fn parse_text(&self, raw_text: &str) -> MultiEntityParseResult {
        if raw_text.trim().is_empty() {
            tracing::debug!("empty input");
            return MultiEntityParseResult::no_input();
        }

        if raw_text.len() > self.config.max_input_bytes {
            tracing::warn!(
                bytes = raw_text.len(),
                limit = self.config.max_input_bytes,
                "input exceeds size limit"
            );
            return MultiEntityParseResult::failure(vec![format!(
                "input exceeds the {} byte limit",
                self.config.max_input_bytes
            )]);
        }

        let text = remove_invisible_chars(raw_text);
        if text.trim().is_empty() {
            return MultiEntityParseResult::no_input();
        }

        let extracted_date = self.dates.extract_iso(&text);
        let segments = self.segmenter.segment(&text);

        tracing::debug!(
            segments = segments.len(),
            date = ?extracted_date,
            "segmented input"
        );

        let reports = segments.iter().map(|s| self.analyze(s)).collect();
        aggregate::aggregate(reports, extracted_date)
    }

    /// Runs matcher, classifier and extractor over one segment.
    fn analyze(&self, segment: &Segment) -> SegmentReport {
        match self.matcher.match_segment(self.catalog.as_ref(), segment) {
            MatchOutcome::Exact(benchmark) => self.benchmark_entity(segment, benchmark),
            MatchOutcome::NearMiss(suggestions) => {
                let names: Vec<String> = suggestions
                    .iter()
                    .map(|s| s.benchmark.name.clone())
                    .collect();
                let (candidate, evidence, notices) =
                    self.custom_entity(segment, names.first().cloned());

                // A bare name is never kept as a custom workout
                let resolution = Resolution::NearMiss {
                    name: candidate.name.clone(),
                    candidate: evidence.has_content().then_some(candidate),
                    suggestions: names,
                };
                SegmentReport::new(segment.index, resolution).with_notices(notices)
            }
            MatchOutcome::Related(benchmark) => {
                self.custom_report(segment, Some(benchmark.name.clone()))
            }
            MatchOutcome::NoMatch => self.custom_report(segment, None),
        }
    }

    /// Clones a catalogue row, filling gaps from the segment.
    fn benchmark_entity(&self, segment: &Segment, benchmark: &BenchmarkWorkout) -> SegmentReport {
        // A bare name line gets the canonical text
        let description = if segment.lines.len() > 1 {
            segment.text()
        } else {
            benchmark.canonical_description.clone()
        };

        let details = self.details.extract(&description);
        let scoring = details
            .scoring
            .clone()
            .or_else(|| (!benchmark.scoring.is_empty()).then(|| benchmark.scoring.clone()));

        let entity = ParsedWorkoutEntity {
            name: benchmark.name.clone(),
            workout_type: benchmark.workout_type,
            scoring,
            time_cap_seconds: details.time_cap_seconds.or(benchmark.time_cap_seconds),
            total_effort: details.total_effort,
            barbell_lifts: details.lifts(),
            related_benchmark: None,
            category: EntityCategory::from(benchmark.category),
            source_table: Some(benchmark.category.table_name().to_string()),
            database_id: benchmark.id.clone(),
            confidence: self.config.exact_match_confidence,
            workout_description: description,
        };

        tracing::debug!(
            segment = segment.index,
            benchmark = %benchmark.name,
            category = %benchmark.category,
            "exact benchmark match"
        );

        SegmentReport::new(segment.index, Resolution::Entity(entity))
            .with_notices(notices(segment.index, details.notices))
    }

    fn custom_report(&self, segment: &Segment, related: Option<String>) -> SegmentReport {
        let (entity, evidence, notices) = self.custom_entity(segment, related);

        if !evidence.has_content() {
            return SegmentReport::new(
                segment.index,
                Resolution::Failed(NO_WORKOUT_ERROR.to_string()),
            );
        }

        SegmentReport::new(segment.index, Resolution::Entity(entity)).with_notices(notices)
    }

    fn custom_entity(
        &self,
        segment: &Segment,
        related: Option<String>,
    ) -> (ParsedWorkoutEntity, Evidence, Vec<SegmentDiagnostic>) {
        let classification = self.classifier.classify(segment);
        let description = segment.text();
        let details = self.details.extract(&description);
        let (name, named) = custom_name(segment, classification.workout_type);

        let evidence = Evidence {
            name: named,
            type_signal: classification.has_signal(),
            body: !segment.body_lines().is_empty(),
        };

        let category = if segment.community {
            EntityCategory::CustomCommunity
        } else {
            self.config.default_custom_category
        };

        let entity = ParsedWorkoutEntity {
            name,
            workout_description: description,
            workout_type: classification.workout_type,
            scoring: details.scoring.clone(),
            time_cap_seconds: details.time_cap_seconds,
            total_effort: details.total_effort,
            barbell_lifts: details.lifts(),
            related_benchmark: related,
            category,
            source_table: None,
            database_id: None,
            confidence: scoring::custom_confidence(&self.config, evidence),
        };

        (entity, evidence, notices(segment.index, details.notices))
    }
}

fn notices(segment: usize, messages: Vec<String>) -> Vec<SegmentDiagnostic> {
    messages
        .into_iter()
        .map(|m| SegmentDiagnostic::new(segment, m))
        .collect()
}

/// Name for a custom entity and whether it came from the text.
fn custom_name(segment: &Segment, workout_type: WorkoutType) -> (String, bool) {
    if let Some(line) = segment.first_line().filter(|_| segment.has_title()) {
        return (clean_title(line), true);
    }
    if let Some(header) = &segment.header {
        return (title_case(header), true);
    }
    (fallback_name(workout_type).to_string(), false)
}

fn fallback_name(workout_type: WorkoutType) -> &'static str {
    match workout_type {
        WorkoutType::ForTime => "For Time Workout",
        WorkoutType::Amrap => "AMRAP Workout",
        WorkoutType::Emom => "EMOM Workout",
        WorkoutType::Tabata => "Tabata Workout",
        WorkoutType::Strength => "Strength Workout",
        WorkoutType::Interval => "Interval Workout",
        WorkoutType::Endurance => "Endurance Workout",
        WorkoutType::Chipper => "Chipper Workout",
        WorkoutType::Ladder => "Ladder Workout",
        WorkoutType::Unbroken => "Unbroken Workout",
    }
}

/// `COOL DOWN` → `Cool Down`
fn title_case(label: &str) -> String {
    label
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
