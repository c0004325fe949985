//! # wodparse
//!
//! A forgiving parser that turns pasted training logs into structured workouts.
//!
//! Users paste whatever their gym posted: a date line, a strength block, a
//! named benchmark, a cool down. This library handles:
//! - Splitting the text into one section per workout
//! - Recognizing benchmark workouts (Girls, Heroes, Notables) despite case,
//!   punctuation and decoration
//! - Offering near-miss suggestions for misspelled benchmark names
//! - Classifying each workout as for time, AMRAP, EMOM, strength and so on
//! - Pulling out time caps, totals, barbell lifts and scoring notes
//!
//! ## Quick Start
//!
//! ```rust
//! use wodparse::parse_workouts;
//! use wodparse::model::{EntityCategory, WorkoutType};
//!
//! let text = "Fran\n21-15-9 reps for time of:\nThrusters (95/65 lb)\nPull-ups\nTime cap: 8 min";
//!
//! let result = parse_workouts(text, "user-1");
//! assert!(result.workout_found);
//!
//! let fran = &result.workout_entities[0];
//! assert_eq!(fran.category, EntityCategory::Girls);
//! assert_eq!(fran.workout_type, WorkoutType::ForTime);
//! assert_eq!(fran.time_cap_seconds, Some(480));
//! ```
//!
//! ## Custom catalogues
//!
//! The parser reads benchmarks through [`BenchmarkSource`](catalog::BenchmarkSource),
//! so a gym can bring its own table:
//!
//! ```rust
//! use std::sync::Arc;
//! use wodparse::{catalog::BenchmarkCatalog, config::ParserConfig, parser::WorkoutParser};
//!
//! let catalog = BenchmarkCatalog::from_json_str(
//!     r#"{"girls": [{"name": "Bella", "description": "AMRAP 10: 10 burpees", "type": "amrap"}]}"#,
//! ).unwrap();
//!
//! let parser = WorkoutParser::new(Arc::new(catalog), ParserConfig::default()).unwrap();
//! assert!(parser.parse_text("Bella").workout_found);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod scoring;

use once_cell::sync::Lazy;

pub use error::{Result, SegmentDiagnostic, WodError};
pub use model::{MultiEntityParseResult, ParseRequest, ParsedWorkoutEntity};
pub use parser::WorkoutParser;

static DEFAULT_PARSER: Lazy<WorkoutParser> = Lazy::new(WorkoutParser::default);

/// Parses pasted workout text with the built-in catalogue and default settings.
///
/// # Examples
///
/// ```
/// use wodparse::parse_workouts;
///
/// let result = parse_workouts("", "user-1");
/// assert!(!result.success);
/// assert_eq!(result.errors, Some(vec!["no input provided".to_string()]));
/// ```
pub fn parse_workouts(raw_text: &str, requesting_user_id: &str) -> MultiEntityParseResult {
    DEFAULT_PARSER.parse(&ParseRequest::new(raw_text, requesting_user_id))
}

/// Parses a JSON request body and returns the JSON response body.
///
/// # Errors
///
/// Returns `WodError::JsonError` if the request is not a valid
/// `{ rawText, requestingUserId }` document.
///
/// # Examples
///
/// ```
/// let body = r#"{"rawText": "Murph", "requestingUserId": "u1"}"#;
/// let response = wodparse::parse_json_request(body).unwrap();
/// assert!(response.contains(r#""category":"heroes""#));
/// ```
pub fn parse_json_request(body: &str) -> Result<String> {
    let request: ParseRequest = serde_json::from_str(body)?;
    DEFAULT_PARSER.parse(&request).to_json()
}
