//! Benchmark name matching.
//!
//! Compares a segment's name line against the catalogue in stages:
//! 1. Exact match on the normalized name
//! 2. Near-miss by edit distance, or one swapped word in long names
//! 3. Whole-word containment (`Modified Murph` resembles `Murph`)
//!
//! Anything else is a custom workout. Matching never fails; odd input just
//! ends up as [`MatchOutcome::NoMatch`].

use super::{
    normalize::{
        clean_title, contains_tokens, levenshtein_distance, normalize_name, token_substitutions,
    },
    segment::{looks_like_title, Segment},
};
use crate::{
    catalog::{BenchmarkSource, BenchmarkWorkout},
    config::ParserConfig,
};

/// Names with at least this many words may differ by one whole word.
const TOKEN_SUBSTITUTION_MIN_TOKENS: usize = 3;

/// A catalogue name offered for a near-miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion<'a> {
    pub benchmark: &'a BenchmarkWorkout,
    /// Character edits between the candidate and this name.
    pub distance: usize,
}

/// The matcher's verdict for one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome<'a> {
    /// The name is a catalogue entry.
    Exact(&'a BenchmarkWorkout),
    /// Close to one or more entries but not equal to any, closest first.
    NearMiss(Vec<Suggestion<'a>>),
    /// A custom name containing a catalogue name as whole words.
    Related(&'a BenchmarkWorkout),
    /// A custom workout.
    NoMatch,
}

impl MatchOutcome<'_> {
    /// Returns true for an exact catalogue match.
    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, MatchOutcome::Exact(_))
    }
}

/// Matches segment names against a benchmark catalogue.
#[derive(Debug, Clone)]
pub struct BenchmarkMatcher {
    max_edit_distance: usize,
    suggestion_limit: usize,
}

impl Default for BenchmarkMatcher {
    fn default() -> Self {
        Self::new(&ParserConfig::default())
    }
}

impl BenchmarkMatcher {
    /// Creates a matcher with the limits from `config`.
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            max_edit_distance: config.max_edit_distance,
            suggestion_limit: config.suggestion_limit,
        }
    }

    /// Matches a segment by its first line.
    pub fn match_segment<'a>(
        &self,
        catalog: &'a dyn BenchmarkSource,
        segment: &Segment,
    ) -> MatchOutcome<'a> {
        let outcome = match segment.first_line() {
            Some(line) => self.match_name(catalog, line),
            None => MatchOutcome::NoMatch,
        };

        tracing::debug!(
            segment = segment.index,
            outcome = outcome_label(&outcome),
            "benchmark match"
        );

        outcome
    }

    /// Matches a single candidate name line.
    ///
    /// # Examples
    ///
    /// ```
    /// use wodparse::catalog::BenchmarkCatalog;
    /// use wodparse::parser::{BenchmarkMatcher, MatchOutcome};
    ///
    /// let catalog = BenchmarkCatalog::builtin();
    /// let matcher = BenchmarkMatcher::default();
    ///
    /// assert!(matcher.match_name(catalog.as_ref(), "FRAN").is_exact());
    /// match matcher.match_name(catalog.as_ref(), "Fren") {
    ///     MatchOutcome::NearMiss(s) => assert_eq!(s[0].benchmark.name, "Fran"),
    ///     other => panic!("unexpected {other:?}"),
    /// }
    /// ```
    pub fn match_name<'a>(&self, catalog: &'a dyn BenchmarkSource, line: &str) -> MatchOutcome<'a> {
        let key = normalize_name(&clean_title(line));
        if key.is_empty() {
            return MatchOutcome::NoMatch;
        }

        if let Some(benchmark) = catalog.find_exact(&key) {
            return MatchOutcome::Exact(benchmark);
        }

        // Content lines ("21-15-9 reps for time") never produce suggestions
        if !looks_like_title(line) {
            return MatchOutcome::NoMatch;
        }

        let suggestions = self.near_misses(catalog, &key);
        if !suggestions.is_empty() {
            return MatchOutcome::NearMiss(suggestions);
        }

        match self.related(catalog, &key) {
            Some(benchmark) => MatchOutcome::Related(benchmark),
            None => MatchOutcome::NoMatch,
        }
    }

    /// Near-miss names sorted by distance, then catalogue order.
    fn near_misses<'a>(&self, catalog: &'a dyn BenchmarkSource, key: &str) -> Vec<Suggestion<'a>> {
        let key_len = key.chars().count();
        let key_tokens = key.split_whitespace().count();

        let mut found: Vec<(usize, usize, &'a BenchmarkWorkout)> = Vec::new();

        for (position, benchmark) in catalog.benchmarks().iter().enumerate() {
            let candidate = benchmark.key();
            let distance = levenshtein_distance(key, candidate);
            if distance == 0 {
                continue;
            }

            let shortest = key_len.min(candidate.chars().count());
            let threshold = self.max_edit_distance.min(shortest / 3);

            let within_edits = distance <= threshold;
            let one_word_swapped = key_tokens >= TOKEN_SUBSTITUTION_MIN_TOKENS
                && token_substitutions(key, candidate) == Some(1);

            if within_edits || one_word_swapped {
                found.push((distance, position, benchmark));
            }
        }

        found.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));

        let mut suggestions: Vec<Suggestion<'a>> = Vec::new();
        for (distance, _, benchmark) in found {
            if suggestions.iter().any(|s| s.benchmark.name == benchmark.name) {
                continue;
            }
            suggestions.push(Suggestion { benchmark, distance });
            if suggestions.len() == self.suggestion_limit {
                break;
            }
        }

        suggestions
    }

    /// The longest catalogue name contained in `key` as whole words.
    fn related<'a>(
        &self,
        catalog: &'a dyn BenchmarkSource,
        key: &str,
    ) -> Option<&'a BenchmarkWorkout> {
        let mut best: Option<&'a BenchmarkWorkout> = None;

        for benchmark in catalog.benchmarks() {
            if !contains_tokens(key, benchmark.key()) {
                continue;
            }
            if best.map_or(true, |b| benchmark.key().len() > b.key().len()) {
                best = Some(benchmark);
            }
        }

        best
    }
}

fn outcome_label(outcome: &MatchOutcome<'_>) -> &'static str {
    match outcome {
        MatchOutcome::Exact(_) => "exact",
        MatchOutcome::NearMiss(_) => "near_miss",
        MatchOutcome::Related(_) => "related",
        MatchOutcome::NoMatch => "no_match",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::{BenchmarkCatalog, BenchmarkCategory},
        model::WorkoutType,
    };

    fn names(outcome: &MatchOutcome<'_>) -> Vec<String> {
        match outcome {
            MatchOutcome::NearMiss(s) => s.iter().map(|s| s.benchmark.name.clone()).collect(),
            _ => Vec::new(),
        }
    }

    fn fake(girls: &[&str], heroes: &[&str]) -> BenchmarkCatalog {
        let build = |category, list: &[&str]| {
            list.iter()
                .map(|n| {
                    BenchmarkWorkout::new(category, *n, WorkoutType::ForTime, "Time", "For time")
                })
                .collect::<Vec<_>>()
        };
        BenchmarkCatalog::new(
            build(BenchmarkCategory::Girls, girls),
            build(BenchmarkCategory::Heroes, heroes),
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn test_exact_match_ignores_case_and_punctuation() {
        let catalog = BenchmarkCatalog::builtin();
        let matcher = BenchmarkMatcher::default();

        for line in ["Fran", "FRAN", "  fran: ", "\"Fran\"", "Fran (Girl WOD)", "**Fran**"] {
            match matcher.match_name(catalog.as_ref(), line) {
                MatchOutcome::Exact(b) => assert_eq!(b.name, "Fran", "{line}"),
                other => panic!("{line}: {other:?}"),
            }
        }

        assert!(matcher.match_name(catalog.as_ref(), "fight-gone-bad").is_exact());
        assert!(matcher.match_name(catalog.as_ref(), "J.T.").is_exact());
    }

    #[test]
    fn test_one_typo_suggests() {
        let catalog = BenchmarkCatalog::builtin();
        let matcher = BenchmarkMatcher::default();

        assert_eq!(names(&matcher.match_name(catalog.as_ref(), "Fren")), vec!["Fran"]);
        assert!(names(&matcher.match_name(catalog.as_ref(), "Murphy"))
            .contains(&"Murph".to_string()));
    }

    #[test]
    fn test_one_word_swapped_in_long_name() {
        let catalog = BenchmarkCatalog::builtin();
        let matcher = BenchmarkMatcher::default();

        let outcome = matcher.match_name(catalog.as_ref(), "Fight Gone Good");
        assert_eq!(names(&outcome), vec!["Fight Gone Bad"]);
    }

    #[test]
    fn test_short_names_need_exact_match() {
        let catalog = BenchmarkCatalog::builtin();
        let matcher = BenchmarkMatcher::default();

        // "DT" is two letters, so no edit budget
        assert_eq!(matcher.match_name(catalog.as_ref(), "DX"), MatchOutcome::NoMatch);
        assert_eq!(matcher.match_name(catalog.as_ref(), "Run"), MatchOutcome::NoMatch);
    }

    #[test]
    fn test_content_line_never_suggests() {
        let catalog = BenchmarkCatalog::builtin();
        let matcher = BenchmarkMatcher::default();

        let outcome = matcher.match_name(catalog.as_ref(), "21-15-9 reps for time of:");
        assert_eq!(outcome, MatchOutcome::NoMatch);
    }

    #[test]
    fn test_ties_broken_by_catalogue_order() {
        let catalog = fake(&["Bella"], &["Della"]);
        let matcher = BenchmarkMatcher::default();

        // "Hella" is one edit from both
        let outcome = matcher.match_name(&catalog, "Hella");
        assert_eq!(names(&outcome), vec!["Bella", "Della"]);
    }

    #[test]
    fn test_suggestions_sorted_and_capped() {
        let catalog = fake(&["Abcdefg", "Abcdefx", "Abcdexx", "Abcdeyy"], &[]);
        let matcher = BenchmarkMatcher::new(&ParserConfig::new().with_suggestion_limit(2));

        let outcome = matcher.match_name(&catalog, "Abcdefz");
        assert_eq!(names(&outcome), vec!["Abcdefg", "Abcdefx"]);
    }

    #[test]
    fn test_related_benchmark() {
        let catalog = BenchmarkCatalog::builtin();
        let matcher = BenchmarkMatcher::default();

        match matcher.match_name(catalog.as_ref(), "Modified Murph") {
            MatchOutcome::Related(b) => assert_eq!(b.name, "Murph"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_custom_name_no_match() {
        let catalog = BenchmarkCatalog::builtin();
        let matcher = BenchmarkMatcher::default();

        assert_eq!(
            matcher.match_name(catalog.as_ref(), "Summer Sweat"),
            MatchOutcome::NoMatch
        );
        assert_eq!(matcher.match_name(catalog.as_ref(), "!!!"), MatchOutcome::NoMatch);
    }
}
