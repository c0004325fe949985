//! Barbell lift dictionary.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::error::{Result, WodError};

/// Lift names recognized out of the box.
pub const DEFAULT_LIFTS: &[&str] = &[
    "Back Squat",
    "Front Squat",
    "Overhead Squat",
    "Clean and Jerk",
    "Power Clean",
    "Squat Clean",
    "Hang Power Clean",
    "Hang Squat Clean",
    "Hang Clean",
    "Clean",
    "Power Snatch",
    "Squat Snatch",
    "Hang Power Snatch",
    "Hang Snatch",
    "Snatch",
    "Sumo Deadlift High Pull",
    "Romanian Deadlift",
    "Deadlift",
    "Thruster",
    "Push Press",
    "Push Jerk",
    "Split Jerk",
    "Shoulder Press",
    "Strict Press",
    "Bench Press",
];

static DEFAULT_DICTIONARY: Lazy<LiftDictionary> = Lazy::new(|| {
    LiftDictionary::new(DEFAULT_LIFTS.iter().copied()).expect("default lift dictionary is valid")
});

/// A fixed set of barbell lift names matched against workout text.
///
/// Matching is case-insensitive, tolerates hyphens or extra spaces between
/// words, `&` for "and", and plural endings. When names overlap the longest
/// one wins, so "Hang Power Clean" never also reports "Clean".
#[derive(Debug, Clone)]
pub struct LiftDictionary {
    /// Display names, longest first. Group `i + 1` of `pattern` is `names[i]`.
    names: Vec<String>,
    pattern: Regex,
}

impl LiftDictionary {
    /// Builds a dictionary from display names.
    ///
    /// # Errors
    ///
    /// Returns `WodError::InvalidConfig` if the list is empty or the combined
    /// pattern cannot be compiled.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names
            .into_iter()
            .map(Into::into)
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();

        if names.is_empty() {
            return Err(WodError::InvalidConfig(
                "lift dictionary has no names".to_string(),
            ));
        }

        // Longest first so alternation prefers the most specific lift
        names.sort_by(|a, b| {
            b.len()
                .cmp(&a.len())
                .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        });
        names.dedup_by(|a, b| a.eq_ignore_ascii_case(b));

        let alternatives: Vec<String> = names
            .iter()
            .map(|name| format!("({})", Self::name_pattern(name)))
            .collect();
        let source = format!(r"\b(?:{})(?:e?s)?\b", alternatives.join("|"));

        let pattern = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(|e| WodError::InvalidConfig(format!("lift dictionary: {e}")))?;

        Ok(Self { names, pattern })
    }

    /// The dictionary built from [`DEFAULT_LIFTS`].
    pub fn builtin() -> &'static LiftDictionary {
        &DEFAULT_DICTIONARY
    }

    fn name_pattern(name: &str) -> String {
        name.split_whitespace()
            .map(|word| {
                if word.eq_ignore_ascii_case("and") {
                    "(?:and|&|n)".to_string()
                } else {
                    regex::escape(word)
                }
            })
            .collect::<Vec<_>>()
            .join(r"[\s\-]+")
    }

    /// Finds lifts in `text`, in first-seen order, without duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use wodparse::catalog::LiftDictionary;
    ///
    /// let text = "3 power cleans, then 5 thrusters, 3 power cleans";
    /// let lifts = LiftDictionary::builtin().find_all(text);
    /// assert_eq!(lifts, vec!["Power Clean", "Thruster"]);
    /// ```
    pub fn find_all(&self, text: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();

        for caps in self.pattern.captures_iter(text) {
            let Some(index) = (1..caps.len()).find(|&i| caps.get(i).is_some()) else {
                continue;
            };
            let name = &self.names[index - 1];
            if !found.iter().any(|f| f == name) {
                found.push(name.clone());
            }
        }

        found
    }

    /// Number of lift names.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_name_wins() {
        let lifts = LiftDictionary::builtin().find_all("5 Hang Power Cleans");
        assert_eq!(lifts, vec!["Hang Power Clean"]);
    }

    #[test]
    fn test_first_seen_order_and_dedup() {
        let text = "Back Squat 5x3\nDeadlift 3x3\nback squat 1x1";
        let lifts = LiftDictionary::builtin().find_all(text);
        assert_eq!(lifts, vec!["Back Squat", "Deadlift"]);
    }

    #[test]
    fn test_variants() {
        let dict = LiftDictionary::builtin();
        assert_eq!(dict.find_all("Clean & Jerk"), vec!["Clean and Jerk"]);
        assert_eq!(dict.find_all("front-squat"), vec!["Front Squat"]);
        assert_eq!(dict.find_all("30 Snatches"), vec!["Snatch"]);
        assert_eq!(dict.find_all("Thrusters (95/65 lb)"), vec!["Thruster"]);
    }

    #[test]
    fn test_no_lifts() {
        let lifts = LiftDictionary::builtin().find_all("10 Burpees\n15 KB Swings");
        assert!(lifts.is_empty());
    }

    #[test]
    fn test_custom_dictionary() {
        let dict = LiftDictionary::new(["Zercher Squat"]).unwrap();
        assert_eq!(dict.find_all("zercher squats 5x5"), vec!["Zercher Squat"]);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_empty_dictionary_rejected() {
        let result = LiftDictionary::new(Vec::<String>::new());
        assert!(matches!(result, Err(WodError::InvalidConfig(_))));
    }
}
