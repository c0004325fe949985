//! Segmentation of pasted text into candidate workout sections.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{
    date::DateExtractor,
    normalize::{clean_title, normalize_name},
};
use crate::{
    catalog::{BenchmarkCatalog, BenchmarkSource},
    config::ParserConfig,
};

/// `Workout:`, `Workout 2:`, `WOD #3: Fran`
static WORKOUT_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:workout|wod)\s*#?\s*(\d+)?\s*:\s*(.*)$")
        .expect("valid workout label regex")
});

/// A line that is only a quoted title, such as `"Fran"`.
static QUOTED_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^["“]([^"“”]{1,60})["”]\s*:?$"#).expect("valid quoted title regex")
});

/// Words and notation that mark a line as workout content rather than a name.
static CONTENT_MARKERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:amrap|emom|e\d+mom|tabata|for\s+time|rounds?|reps?|rest|minutes?|mins?|seconds?|secs?|cap|every|sets?|max|scoring|score)\b|\d+\s*[x×]\s*\d+|\d+(?:\s*-\s*\d+)+|[@%:]|\b\d+\s*(?:m|km|cal|lbs?|kg)\b",
    )
    .expect("valid content marker regex")
});

/// A contiguous run of lines believed to describe one workout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// 1-based position among the segments of the input.
    pub index: usize,
    /// Section label that opened this segment, if any.
    pub header: Option<String>,
    /// True when the opening label marks a community workout.
    pub community: bool,
    /// Trimmed, non-empty lines.
    pub lines: Vec<String>,
}

impl Segment {
    /// The segment text, lines joined with newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// The first line, which the matcher treats as the candidate name.
    pub fn first_line(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }

    /// True when the first line reads like a workout name.
    pub fn has_title(&self) -> bool {
        self.first_line().is_some_and(looks_like_title)
    }

    /// Lines after the title, or all lines when there is no title.
    pub fn body_lines(&self) -> &[String] {
        if self.has_title() {
            &self.lines[1..]
        } else {
            &self.lines
        }
    }

    /// Body text, lines joined with newlines.
    pub fn body(&self) -> String {
        self.body_lines().join("\n")
    }
}

/// Returns true if `line` reads like a workout name rather than content.
///
/// ```
/// use wodparse::parser::looks_like_title;
///
/// assert!(looks_like_title("Summer Sweat"));
/// assert!(looks_like_title("\"Fran\""));
/// assert!(!looks_like_title("AMRAP 20 minutes:"));
/// assert!(!looks_like_title("Back Squat 5x3 @85%"));
/// ```
pub fn looks_like_title(line: &str) -> bool {
    let title = clean_title(line);

    if title.is_empty() || title.chars().count() > 50 {
        return false;
    }
    if !title.chars().any(char::is_alphabetic) {
        return false;
    }
    if title.starts_with(|c: char| c.is_ascii_digit()) {
        return false;
    }
    if title.split_whitespace().count() > 6 {
        return false;
    }

    !CONTENT_MARKERS.is_match(&title)
}

#[derive(Debug, PartialEq)]
enum LineKind {
    Blank,
    Date,
    Header {
        label: Option<String>,
        community: bool,
        carry: Option<String>,
    },
    Content(String),
}

#[derive(Debug, Default)]
struct OpenSegment {
    header: Option<String>,
    community: bool,
    lines: Vec<String>,
}

/// Splits raw text into [`Segment`]s.
///
/// Boundaries are blank-line runs and header lines: a section label on its own
/// line, a `Workout:` label, or a quoted title. Section labels are the
/// configured ones plus any all-caps line without digits or format words,
/// unless it names a benchmark. Lines that are only a date are dropped.
/// Segments without alphabetic content are discarded.
///
/// # Examples
///
/// ```
/// use wodparse::parser::Segmenter;
///
/// let text = "STRENGTH\nBack Squat 5x3\n\nCONDITIONING\nFran\n21-15-9";
/// let segments = Segmenter::default().segment(text);
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[1].first_line(), Some("Fran"));
/// ```
#[derive(Debug, Clone)]
pub struct Segmenter {
    /// Normalized header labels and whether they mark community workouts.
    headers: Vec<(String, bool)>,
    /// Consulted so that an all-caps benchmark name is not read as a label.
    catalog: Option<Arc<dyn BenchmarkSource>>,
    dates: DateExtractor,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(&ParserConfig::default()).with_catalog(BenchmarkCatalog::builtin())
    }
}

impl Segmenter {
    /// Creates a segmenter using the header labels in `config`.
    pub fn new(config: &ParserConfig) -> Self {
        let headers = config
            .section_headers
            .iter()
            .map(|h| (normalize_name(h), false))
            .chain(
                config
                    .community_headers
                    .iter()
                    .map(|h| (normalize_name(h), true)),
            )
            .filter(|(key, _)| !key.is_empty())
            .collect();

        Self {
            headers,
            catalog: None,
            dates: DateExtractor::new(),
        }
    }

    /// Keeps all-caps lines naming a benchmark in `catalog` out of the labels.
    pub fn with_catalog(mut self, catalog: Arc<dyn BenchmarkSource>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Splits `input` into segments in input order.
    pub fn segment(&self, input: &str) -> Vec<Segment> {
        let mut raw: Vec<OpenSegment> = Vec::new();
        let mut current = OpenSegment::default();

        for line in input.lines() {
            match self.classify(line) {
                LineKind::Blank => {
                    if !current.lines.is_empty() {
                        raw.push(std::mem::take(&mut current));
                    }
                }
                LineKind::Date => {}
                LineKind::Header {
                    label,
                    community,
                    carry,
                } => {
                    if !current.lines.is_empty() {
                        raw.push(std::mem::take(&mut current));
                    }
                    // A header with no content yet replaces any pending one
                    current.header = label;
                    current.community = community;
                    current.lines.extend(carry);
                }
                LineKind::Content(text) => current.lines.push(text),
            }
        }
        if !current.lines.is_empty() {
            raw.push(current);
        }

        let raw: Vec<OpenSegment> = raw
            .into_iter()
            .filter(|s| s.lines.iter().any(|l| l.chars().any(char::is_alphabetic)))
            .collect();

        let merged = merge_orphan_titles(raw);

        tracing::trace!(segments = merged.len(), "segmented input");

        merged
            .into_iter()
            .enumerate()
            .map(|(i, s)| Segment {
                index: i + 1,
                header: s.header,
                community: s.community,
                lines: s.lines,
            })
            .collect()
    }

    fn classify(&self, line: &str) -> LineKind {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return LineKind::Blank;
        }

        // Exact date lines win over headers
        if self.dates.is_date_line(trimmed) {
            return LineKind::Date;
        }

        if let Some((label, community)) = self.match_header(trimmed) {
            return LineKind::Header {
                label: Some(label),
                community,
                carry: None,
            };
        }

        if let Some(caps) = WORKOUT_LABEL.captures(trimmed) {
            let label = match caps.get(1) {
                Some(n) => format!("Workout {}", n.as_str()),
                None => "Workout".to_string(),
            };
            let rest = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default();
            return LineKind::Header {
                label: Some(label),
                community: false,
                carry: (!rest.is_empty()).then(|| rest.to_string()),
            };
        }

        if let Some(caps) = QUOTED_TITLE.captures(trimmed) {
            let title = caps[1].trim();
            if !title.is_empty() {
                return LineKind::Header {
                    label: None,
                    community: false,
                    carry: Some(title.to_string()),
                };
            }
        }

        LineKind::Content(trimmed.to_string())
    }

    fn match_header(&self, line: &str) -> Option<(String, bool)> {
        let label = line
            .trim_matches(|c: char| matches!(c, '#' | '*' | '_' | '=' | '-' | '~' | '[' | ']'))
            .trim()
            .trim_end_matches(':')
            .trim();

        let key = normalize_name(label);
        if key.is_empty() {
            return None;
        }

        if let Some((_, community)) = self.headers.iter().find(|(header, _)| *header == key) {
            return Some((label.to_string(), *community));
        }

        self.is_caps_label(label).then(|| (label.to_string(), false))
    }

    /// `ENGINE`, `PARTNER WOD`: an unlisted label written in capitals.
    fn is_caps_label(&self, label: &str) -> bool {
        let letters = label.chars().filter(|c| c.is_alphabetic()).count();
        if letters < 2 || label.split_whitespace().count() > 4 {
            return false;
        }
        if label.chars().any(|c| c.is_ascii_digit() || c.is_lowercase()) {
            return false;
        }
        if QUOTED_TITLE.is_match(label) || CONTENT_MARKERS.is_match(label) {
            return false;
        }

        let name = normalize_name(&clean_title(label));
        match &self.catalog {
            Some(catalog) => catalog.find_exact(&name).is_none(),
            None => true,
        }
    }
}

/// Joins a lone title block with the untitled block that follows it.
///
/// Handles a name separated from its body by a blank line.
fn merge_orphan_titles(segments: Vec<OpenSegment>) -> Vec<OpenSegment> {
    let mut merged: Vec<OpenSegment> = Vec::with_capacity(segments.len());

    for segment in segments {
        let absorb = merged.last().is_some_and(|prev| {
            prev.lines.len() == 1
                && looks_like_title(&prev.lines[0])
                && segment.header.is_none()
                && segment.lines.first().is_some_and(|l| !looks_like_title(l))
        });

        match merged.last_mut() {
            Some(prev) if absorb => prev.lines.extend(segment.lines),
            _ => merged.push(segment),
        }
    }

    merged
}
