//! Request and response types exchanged with the calling service.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::BenchmarkCategory;

/// Diagnostic returned when the request carries no text.
pub const NO_INPUT_ERROR: &str = "no input provided";

/// The training format of a workout.
///
/// Every entity carries exactly one of these. Segments with no recognizable
/// format fall back to [`WorkoutType::ForTime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    ForTime,
    Amrap,
    Emom,
    Tabata,
    Strength,
    Interval,
    Endurance,
    Chipper,
    Ladder,
    Unbroken,
}

impl WorkoutType {
    /// Returns the wire name of this type (`for_time`, `amrap`, ...).
    pub const fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::ForTime => "for_time",
            WorkoutType::Amrap => "amrap",
            WorkoutType::Emom => "emom",
            WorkoutType::Tabata => "tabata",
            WorkoutType::Strength => "strength",
            WorkoutType::Interval => "interval",
            WorkoutType::Endurance => "endurance",
            WorkoutType::Chipper => "chipper",
            WorkoutType::Ladder => "ladder",
            WorkoutType::Unbroken => "unbroken",
        }
    }

    /// All workout types, in declaration order.
    pub fn all() -> &'static [WorkoutType] {
        &[
            WorkoutType::ForTime,
            WorkoutType::Amrap,
            WorkoutType::Emom,
            WorkoutType::Tabata,
            WorkoutType::Strength,
            WorkoutType::Interval,
            WorkoutType::Endurance,
            WorkoutType::Chipper,
            WorkoutType::Ladder,
            WorkoutType::Unbroken,
        ]
    }
}

impl Default for WorkoutType {
    fn default() -> Self {
        WorkoutType::ForTime
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a parsed entity comes from.
///
/// Catalogue categories are only assigned on an exact benchmark match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    Girls,
    Heroes,
    Notables,
    CustomCommunity,
    CustomUser,
}

impl EntityCategory {
    /// Returns true for the two custom categories.
    pub const fn is_custom(&self) -> bool {
        matches!(self, EntityCategory::CustomCommunity | EntityCategory::CustomUser)
    }
}

impl From<BenchmarkCategory> for EntityCategory {
    fn from(category: BenchmarkCategory) -> Self {
        match category {
            BenchmarkCategory::Girls => EntityCategory::Girls,
            BenchmarkCategory::Heroes => EntityCategory::Heroes,
            BenchmarkCategory::Notables => EntityCategory::Notables,
        }
    }
}

/// A parse request from the surrounding service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseRequest {
    /// The pasted workout text.
    pub raw_text: String,
    /// Identity of the caller. Only used for log correlation.
    pub requesting_user_id: String,
}

impl ParseRequest {
    /// Creates a new request.
    pub fn new(raw_text: impl Into<String>, requesting_user_id: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            requesting_user_id: requesting_user_id.into(),
        }
    }
}

/// The structured record produced for one segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedWorkoutEntity {
    pub name: String,
    /// Segment text as pasted. Never empty.
    pub workout_description: String,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_cap_seconds: Option<u32>,
    /// Explicitly stated rep or round total.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_effort: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barbell_lifts: Option<Vec<String>>,
    /// Catalogue workout this custom entity resembles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_benchmark: Option<String>,
    pub category: EntityCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_table: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_id: Option<String>,
    /// Confidence for this entity, 0-100.
    pub confidence: u8,
}

/// Top-level response for one parse call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiEntityParseResult {
    /// True iff at least one entity was produced.
    pub success: bool,
    pub workout_found: bool,
    /// Entities in input order.
    pub workout_entities: Vec<ParsedWorkoutEntity>,
    /// First date found in the input, as `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_date: Option<String>,
    pub confidence: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_workouts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl MultiEntityParseResult {
    /// Result returned for blank input.
    pub fn no_input() -> Self {
        Self::failure(vec![NO_INPUT_ERROR.to_string()])
    }

    /// A failed result carrying only diagnostics.
    pub fn failure(errors: Vec<String>) -> Self {
        Self {
            success: false,
            workout_found: false,
            workout_entities: Vec::new(),
            extracted_date: None,
            confidence: 0,
            suggested_workouts: None,
            errors: Some(errors),
        }
    }

    /// Serializes the result as a JSON string.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
