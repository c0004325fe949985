//! Text normalization shared by the pipeline stages.
//!
//! Names are compared in a canonical form: accents removed, lowercase,
//! punctuation stripped and whitespace collapsed. `"Fight-Gone-Bad!"` and
//! `"fight gone  bad"` normalize to the same key.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Label prefixes that are not part of a workout's name.
static NAME_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:workout|wod|benchmark|hero wod|girl wod|metcon)\s*\d*\s*[:\-]\s*")
        .expect("valid name prefix regex")
});

/// A trailing parenthetical such as `(Girl WOD)` or `(RX)`.
static TRAILING_PAREN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\([^)]*\)\s*$").expect("valid parenthetical regex"));

/// Removes zero-width and direction-control characters and unifies line endings.
///
/// Text pasted from chat apps and PDFs often carries these.
pub fn remove_invisible_chars(input: &str) -> String {
    input
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace(['\u{00A0}', '\u{2007}', '\u{202F}'], " ")
        .replace(
            [
                '\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}', '\u{200E}', '\u{200F}', '\u{202A}',
                '\u{202B}', '\u{202C}', '\u{202D}', '\u{202E}',
            ],
            "",
        )
}

/// Removes accents from characters (é → e, ñ → n).
pub fn remove_accents(s: &str) -> String {
    let s = s
        .replace('ß', "ss")
        .replace('æ', "ae")
        .replace('Æ', "AE")
        .replace('ø', "o")
        .replace('Ø', "O")
        .replace('œ', "oe")
        .replace('Œ', "OE");

    s.nfkd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .collect()
}

/// Normalizes a name into its comparison key.
///
/// # Examples
/// ```
/// use wodparse::parser::normalize::normalize_name;
///
/// assert_eq!(normalize_name("  Fight-Gone-Bad! "), "fight gone bad");
/// assert_eq!(normalize_name("J.T."), "jt");
/// assert_eq!(normalize_name("Clean & Jerk"), "clean and jerk");
/// ```
pub fn normalize_name(s: &str) -> String {
    let unaccented = remove_accents(s).to_lowercase().replace('&', " and ");

    let mut cleaned = String::with_capacity(unaccented.len());
    for ch in unaccented.chars() {
        if ch.is_alphanumeric() {
            cleaned.push(ch);
        } else if ch.is_whitespace() || matches!(ch, '-' | '_' | '/' | '+') {
            cleaned.push(' ');
        }
    }

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strips decoration from a candidate name line.
///
/// Removes markdown emphasis and heading marks, surrounding quotes, a leading
/// `Workout:` style label, a trailing parenthetical and a trailing colon.
pub fn clean_title(line: &str) -> String {
    let mut title = line
        .trim()
        .trim_matches(|c: char| matches!(c, '#' | '*' | '_' | '=' | '>' | '~'))
        .trim()
        .to_string();

    title = NAME_PREFIX.replace(&title, "").into_owned();
    title = TRAILING_PAREN.replace(&title, "").into_owned();

    title
        .trim()
        .trim_end_matches([':', '-', '.'])
        .trim()
        .trim_matches(|c: char| matches!(c, '"' | '\'' | '“' | '”' | '‘' | '’'))
        .trim()
        .to_string()
}

/// Calculate Levenshtein distance between two strings.
///
/// Classic dynamic programming edit distance over chars.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    for (i, row) in matrix.iter_mut().enumerate().take(len1 + 1) {
        row[0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for (i, c1) in s1_chars.iter().enumerate() {
        for (j, c2) in s2_chars.iter().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            matrix[i + 1][j + 1] = std::cmp::min(
                std::cmp::min(
                    matrix[i][j + 1] + 1, // deletion
                    matrix[i + 1][j] + 1, // insertion
                ),
                matrix[i][j] + cost, // substitution
            );
        }
    }

    matrix[len1][len2]
}

/// Counts whole-token substitutions between two normalized names.
///
/// Returns `None` when the token counts differ.
pub fn token_substitutions(a: &str, b: &str) -> Option<usize> {
    let a_tokens: Vec<&str> = a.split_whitespace().collect();
    let b_tokens: Vec<&str> = b.split_whitespace().collect();

    if a_tokens.len() != b_tokens.len() {
        return None;
    }

    Some(
        a_tokens
            .iter()
            .zip(&b_tokens)
            .filter(|(x, y)| x != y)
            .count(),
    )
}

/// Returns true if `needle` occurs in `haystack` as a run of whole tokens.
///
/// Both arguments must already be normalized.
pub fn contains_tokens(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let padded_haystack = format!(" {haystack} ");
    let padded_needle = format!(" {needle} ");
    padded_haystack.contains(&padded_needle)
}
