//! Error types for parser setup and per-segment diagnostics.

use std::fmt;

use crate::catalog::BenchmarkCategory;

/// Result type alias for setup operations.
pub type Result<T> = std::result::Result<T, WodError>;

/// Errors that can occur while building a parser.
///
/// Parsing itself never fails: malformed workout text is reported through
/// [`MultiEntityParseResult::errors`](crate::model::MultiEntityParseResult).
/// These variants cover programmer and startup errors only.
#[derive(Debug, thiserror::Error)]
pub enum WodError {
    /// A catalogue was built with no benchmark entries at all.
    #[error("Benchmark catalogue is empty")]
    EmptyCatalog,

    /// Two entries in the same category normalize to the same name.
    #[error("Duplicate benchmark '{name}' in {category}")]
    DuplicateBenchmark {
        /// The offending benchmark name.
        name: String,
        /// Category holding both entries.
        category: BenchmarkCategory,
    },

    /// A catalogue entry has a name with no matchable characters.
    #[error("Benchmark in {category} has an empty name")]
    EmptyBenchmarkName {
        /// Category holding the entry.
        category: BenchmarkCategory,
    },

    /// Configuration error.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading a catalogue or config file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error from serde_json.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML error from serde_yaml.
    #[cfg(feature = "yaml")]
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// A problem found while turning one segment into an entity.
///
/// Diagnostics are data, not failures. The aggregator renders them into the
/// `errors` list of the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentDiagnostic {
    /// 1-based position of the segment in the input.
    pub segment: usize,
    /// Human-readable description of the problem.
    pub message: String,
}

impl SegmentDiagnostic {
    /// Creates a new segment diagnostic.
    #[inline]
    pub fn new(segment: usize, message: impl Into<String>) -> Self {
        Self {
            segment,
            message: message.into(),
        }
    }
}

impl fmt::Display for SegmentDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "segment {}: {}", self.segment, self.message)
    }
}
