//! Date extraction.
//!
//! Finds the first calendar date in the pasted text. Supported forms:
//!
//! - `27-June-2025 | Friday` (day, month name, year, optional weekday)
//! - `2025-06-27`
//! - `June 27, 2025` (optional leading weekday and ordinal suffix)
//! - `27/6/2025` (day first)
//!
//! Tokens that look like dates but are not valid calendar days are skipped.

use chrono::{Datelike, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const MONTH: &str = r"(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?";

const WEEKDAY: &str = r"(mon(?:day)?|tue(?:s(?:day)?)?|wed(?:nesday)?|thu(?:r(?:s(?:day)?)?)?|fri(?:day)?|sat(?:urday)?|sun(?:day)?)";

/// `27-June-2025 | Friday`
static DAY_MONTH_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b(\d{{1,2}})(?:st|nd|rd|th)?[\s\-.]+{MONTH}[\s\-.,]+(\d{{4}})\b(?:\s*[|,\-]?\s*{WEEKDAY}\b)?"
    ))
    .expect("valid day-month-year regex")
});

/// `2025-06-27`
static ISO_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b").expect("valid ISO date regex")
});

/// `Friday, June 27, 2025`
static MONTH_DAY_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:{WEEKDAY},?\s+)?{MONTH}\s+(\d{{1,2}})(?:st|nd|rd|th)?,?\s+(\d{{4}})\b"
    ))
    .expect("valid month-day-year regex")
});

/// `27/6/2025`
static SLASH_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b").expect("valid slash date regex")
});

static WEEKDAY_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?i)\b{WEEKDAY}\b")).expect("valid weekday regex"));

/// Scans text for dates.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateExtractor;

impl DateExtractor {
    /// Creates a new date extractor.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Returns the first valid date in `input`, scanning line by line.
    ///
    /// # Examples
    ///
    /// ```
    /// use wodparse::parser::DateExtractor;
    ///
    /// let date = DateExtractor::new().extract("27-June-2025 | Friday\nFran").unwrap();
    /// assert_eq!(date.to_string(), "2025-06-27");
    /// ```
    pub fn extract(&self, input: &str) -> Option<NaiveDate> {
        input.lines().find_map(|line| self.extract_from_line(line))
    }

    /// Returns the first valid date as an ISO `YYYY-MM-DD` string.
    pub fn extract_iso(&self, input: &str) -> Option<String> {
        self.extract(input).map(|d| d.format("%Y-%m-%d").to_string())
    }

    fn extract_from_line(&self, line: &str) -> Option<NaiveDate> {
        let grammars: [(&Regex, fn(&Captures<'_>) -> Option<NaiveDate>); 4] = [
            (&DAY_MONTH_YEAR, day_month_year),
            (&ISO_DATE, iso_date),
            (&MONTH_DAY_YEAR, month_day_year),
            (&SLASH_DATE, slash_date),
        ];

        for (regex, build) in grammars {
            for caps in regex.captures_iter(line) {
                match build(&caps) {
                    Some(date) => {
                        check_weekday(&caps, date);
                        return Some(date);
                    }
                    None => {
                        tracing::trace!(token = &caps[0], "skipping invalid date token");
                    }
                }
            }
        }

        None
    }

    /// Returns true if the whole line is a date, optionally with a weekday.
    ///
    /// Only syntax is checked, so `31-February-2025` is still a date line.
    pub fn is_date_line(&self, line: &str) -> bool {
        let line = line.trim();
        if line.is_empty() {
            return false;
        }

        let grammars: [&Regex; 4] = [&DAY_MONTH_YEAR, &ISO_DATE, &MONTH_DAY_YEAR, &SLASH_DATE];

        grammars.iter().any(|regex| {
            regex.find(line).is_some_and(|m| {
                let rest = format!("{} {}", &line[..m.start()], &line[m.end()..]);
                let rest = WEEKDAY_WORD.replace_all(&rest, "");
                rest.chars().all(|c| {
                    c.is_whitespace() || matches!(c, '|' | ',' | '-' | '.' | '(' | ')' | ':')
                })
            })
        })
    }
}

fn day_month_year(caps: &Captures<'_>) -> Option<NaiveDate> {
    let day: u32 = caps[1].parse().ok()?;
    let month = month_number(&caps[2])?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn iso_date(caps: &Captures<'_>) -> Option<NaiveDate> {
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_day_year(caps: &Captures<'_>) -> Option<NaiveDate> {
    let month = month_number(caps.get(2)?.as_str())?;
    let day: u32 = caps[3].parse().ok()?;
    let year: i32 = caps[4].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn slash_date(caps: &Captures<'_>) -> Option<NaiveDate> {
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_number(name: &str) -> Option<u32> {
    let prefix: String = name.to_lowercase().chars().take(3).collect();
    let month = match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

fn weekday_from_name(name: &str) -> Option<Weekday> {
    let prefix: String = name.to_lowercase().chars().take(3).collect();
    let weekday = match prefix.as_str() {
        "mon" => Weekday::Mon,
        "tue" => Weekday::Tue,
        "wed" => Weekday::Wed,
        "thu" => Weekday::Thu,
        "fri" => Weekday::Fri,
        "sat" => Weekday::Sat,
        "sun" => Weekday::Sun,
        _ => return None,
    };
    Some(weekday)
}

/// Logs a weekday that disagrees with the date. The date still wins.
fn check_weekday(caps: &Captures<'_>, date: NaiveDate) {
    // Weekday and month prefixes never collide, so any group naming a weekday is the weekday
    let stated = caps
        .iter()
        .skip(1)
        .flatten()
        .find_map(|m| weekday_from_name(m.as_str()));

    if let Some(stated) = stated {
        if stated != date.weekday() {
            tracing::debug!(
                %date,
                stated = %stated,
                actual = %date.weekday(),
                "weekday does not match date"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iso(input: &str) -> Option<String> {
        DateExtractor::new().extract_iso(input)
    }

    #[test]
    fn test_day_month_year_with_weekday() {
        assert_eq!(iso("27-June-2025 | Friday"), Some("2025-06-27".to_string()));
        assert_eq!(iso("3 Mar 2024"), Some("2024-03-03".to_string()));
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(iso("Logged 2024-02-29 at the gym"), Some("2024-02-29".to_string()));
    }

    #[test]
    fn test_month_day_year() {
        assert_eq!(iso("Friday, June 27, 2025"), Some("2025-06-27".to_string()));
        assert_eq!(iso("Sept 1st 2023"), Some("2023-09-01".to_string()));
    }

    #[test]
    fn test_slash_date_is_day_first() {
        assert_eq!(iso("27/6/2025"), Some("2025-06-27".to_string()));
        assert_eq!(iso("1/2/2025"), Some("2025-02-01".to_string()));
    }

    #[test]
    fn test_invalid_date_is_skipped() {
        let input = "31-February-2025 | Monday\nFran\n2025-03-04";
        assert_eq!(iso(input), Some("2025-03-04".to_string()));
    }

    #[test]
    fn test_no_date() {
        assert_eq!(iso("Fran\n21-15-9 reps for time of:\nThrusters (95/65 lb)"), None);
    }

    #[test]
    fn test_is_date_line() {
        let extractor = DateExtractor::new();
        assert!(extractor.is_date_line("27-June-2025 | Friday"));
        assert!(extractor.is_date_line("  2025-06-27 "));
        assert!(extractor.is_date_line("Friday, June 27, 2025"));
        assert!(extractor.is_date_line("31-February-2025"));
        assert!(!extractor.is_date_line("Fran 2025-06-27"));
        assert!(!extractor.is_date_line("STRENGTH"));
        assert!(!extractor.is_date_line("21-15-9"));
    }
}
