//! Benchmark workout catalogue.
//!
//! The catalogue is a read-only table of named benchmark workouts, split into
//! three fixed categories. It is built once, validated, and then shared
//! between parser instances behind an [`Arc`].
//!
//! ```
//! use wodparse::catalog::{BenchmarkCatalog, BenchmarkSource};
//!
//! let catalog = BenchmarkCatalog::builtin();
//! let fran = catalog.find_exact("fran").unwrap();
//! assert_eq!(fran.name, "Fran");
//! ```

mod builtin;
mod lifts;

use std::{collections::HashMap, fmt, fs, path::Path, sync::Arc};

pub use lifts::LiftDictionary;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, WodError},
    model::WorkoutType,
    parser::normalize::normalize_name,
};

/// The three benchmark families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenchmarkCategory {
    Girls,
    Heroes,
    Notables,
}

impl BenchmarkCategory {
    /// Catalogue order, which is also the matcher's tie-break order.
    pub fn all() -> &'static [BenchmarkCategory] {
        &[
            BenchmarkCategory::Girls,
            BenchmarkCategory::Heroes,
            BenchmarkCategory::Notables,
        ]
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            BenchmarkCategory::Girls => "girls",
            BenchmarkCategory::Heroes => "heroes",
            BenchmarkCategory::Notables => "notables",
        }
    }

    /// Name of the table a cloned entity points back to.
    pub const fn table_name(&self) -> &'static str {
        match self {
            BenchmarkCategory::Girls => "girl_workouts",
            BenchmarkCategory::Heroes => "hero_workouts",
            BenchmarkCategory::Notables => "notable_workouts",
        }
    }
}

impl fmt::Display for BenchmarkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkWorkout {
    /// Stable row identifier, surfaced as `databaseId` on clones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub category: BenchmarkCategory,
    pub canonical_description: String,
    pub workout_type: WorkoutType,
    pub scoring: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_cap_seconds: Option<u32>,
    /// Normalized name used for lookups.
    #[serde(skip)]
    key: String,
}

impl BenchmarkWorkout {
    /// Creates a new catalogue entry.
    pub fn new(
        category: BenchmarkCategory,
        name: impl Into<String>,
        workout_type: WorkoutType,
        scoring: impl Into<String>,
        canonical_description: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let key = normalize_name(&name);
        Self {
            id: None,
            name,
            category,
            canonical_description: canonical_description.into(),
            workout_type,
            scoring: scoring.into(),
            time_cap_seconds: None,
            key,
        }
    }

    /// Sets the row identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the canonical time cap.
    pub fn with_time_cap(mut self, seconds: u32) -> Self {
        self.time_cap_seconds = Some(seconds);
        self
    }

    /// The normalized lookup key for this entry's name.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Read access to a benchmark table.
///
/// The parser only sees the catalogue through this trait so that callers can
/// inject their own tables (a gym's custom list, a test fake).
pub trait BenchmarkSource: Send + Sync + fmt::Debug {
    /// All entries in catalogue order: girls, then heroes, then notables.
    fn benchmarks(&self) -> &[BenchmarkWorkout];

    /// Looks up an entry by normalized name.
    fn find_exact(&self, normalized: &str) -> Option<&BenchmarkWorkout> {
        self.benchmarks().iter().find(|b| b.key() == normalized)
    }
}

/// The standard in-memory catalogue.
#[derive(Debug, Clone)]
pub struct BenchmarkCatalog {
    entries: Vec<BenchmarkWorkout>,
    index: HashMap<String, usize>,
}

static BUILTIN: Lazy<Arc<BenchmarkCatalog>> = Lazy::new(|| {
    Arc::new(
        BenchmarkCatalog::new(builtin::girls(), builtin::heroes(), builtin::notables())
            .expect("built-in benchmark catalogue is valid"),
    )
});

impl BenchmarkCatalog {
    /// Builds a catalogue from the three category lists.
    ///
    /// Each entry's category is taken from the list it appears in.
    ///
    /// # Errors
    ///
    /// Returns `WodError::EmptyCatalog` if all lists are empty,
    /// `WodError::EmptyBenchmarkName` if a name has no matchable characters and
    /// `WodError::DuplicateBenchmark` if two entries of one category share a
    /// normalized name.
    pub fn new(
        girls: Vec<BenchmarkWorkout>,
        heroes: Vec<BenchmarkWorkout>,
        notables: Vec<BenchmarkWorkout>,
    ) -> Result<Self> {
        let lists = [
            (BenchmarkCategory::Girls, girls),
            (BenchmarkCategory::Heroes, heroes),
            (BenchmarkCategory::Notables, notables),
        ];

        let mut entries = Vec::new();
        let mut index = HashMap::new();

        for (category, list) in lists {
            let mut seen: Vec<String> = Vec::new();
            for mut entry in list {
                entry.category = category;
                entry.key = normalize_name(&entry.name);

                if entry.key.is_empty() {
                    return Err(WodError::EmptyBenchmarkName { category });
                }
                if seen.contains(&entry.key) {
                    return Err(WodError::DuplicateBenchmark {
                        name: entry.name,
                        category,
                    });
                }
                seen.push(entry.key.clone());

                // Earlier categories win when a name repeats across lists
                index.entry(entry.key.clone()).or_insert(entries.len());
                entries.push(entry);
            }
        }

        if entries.is_empty() {
            return Err(WodError::EmptyCatalog);
        }

        tracing::debug!(entries = entries.len(), "benchmark catalogue built");

        Ok(Self { entries, index })
    }

    /// The catalogue shipped with the crate.
    ///
    /// Built on first use and shared for the rest of the process.
    pub fn builtin() -> Arc<BenchmarkCatalog> {
        Arc::clone(&BUILTIN)
    }

    /// Parses a catalogue document from JSON.
    ///
    /// The document has optional `girls`, `heroes` and `notables` arrays.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(input)?;
        document.into_catalog()
    }

    /// Parses a catalogue document from YAML.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        let document: CatalogDocument = serde_yaml::from_str(input)?;
        document.into_catalog()
    }

    /// Loads a catalogue file, choosing the format by extension.
    ///
    /// `.yaml`/`.yml` files need the `yaml` feature; everything else is read as JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml" | "yml")
        );

        tracing::debug!(path = %path.display(), is_yaml, "loading benchmark catalogue");

        if is_yaml {
            #[cfg(feature = "yaml")]
            {
                return Self::from_yaml_str(&contents);
            }
            #[cfg(not(feature = "yaml"))]
            {
                return Err(WodError::InvalidConfig(format!(
                    "{} is YAML but the `yaml` feature is disabled",
                    path.display()
                )));
            }
        }

        Self::from_json_str(&contents)
    }

    /// Entries of a single category, in catalogue order.
    pub fn category(&self, category: BenchmarkCategory) -> impl Iterator<Item = &BenchmarkWorkout> {
        self.entries.iter().filter(move |b| b.category == category)
    }

    /// Number of entries across all categories.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed catalogue.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl BenchmarkSource for BenchmarkCatalog {
    #[inline]
    fn benchmarks(&self) -> &[BenchmarkWorkout] {
        &self.entries
    }

    fn find_exact(&self, normalized: &str) -> Option<&BenchmarkWorkout> {
        self.index.get(normalized).map(|&i| &self.entries[i])
    }
}

/// On-disk catalogue layout.
#[derive(Debug, Default, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    girls: Vec<BenchmarkEntry>,
    #[serde(default)]
    heroes: Vec<BenchmarkEntry>,
    #[serde(default)]
    notables: Vec<BenchmarkEntry>,
}

/// One catalogue row as written in a file. The category comes from the list.
#[derive(Debug, Deserialize)]
struct BenchmarkEntry {
    #[serde(default)]
    id: Option<String>,
    name: String,
    #[serde(alias = "canonicalDescription", alias = "canonical_description")]
    description: String,
    #[serde(rename = "type", alias = "workoutType", alias = "workout_type")]
    workout_type: WorkoutType,
    #[serde(default)]
    scoring: String,
    #[serde(default, alias = "timeCapSeconds")]
    time_cap_seconds: Option<u32>,
}

impl CatalogDocument {
    fn into_catalog(self) -> Result<BenchmarkCatalog> {
        let convert = |category: BenchmarkCategory, list: Vec<BenchmarkEntry>| {
            list.into_iter()
                .map(|e| {
                    let mut workout = BenchmarkWorkout::new(
                        category,
                        e.name,
                        e.workout_type,
                        e.scoring,
                        e.description,
                    );
                    workout.id = e.id;
                    workout.time_cap_seconds = e.time_cap_seconds;
                    workout
                })
                .collect::<Vec<_>>()
        };

        BenchmarkCatalog::new(
            convert(BenchmarkCategory::Girls, self.girls),
            convert(BenchmarkCategory::Heroes, self.heroes),
            convert(BenchmarkCategory::Notables, self.notables),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn girl(name: &str) -> BenchmarkWorkout {
        BenchmarkWorkout::new(
            BenchmarkCategory::Girls,
            name,
            WorkoutType::ForTime,
            "Time",
            "For time: 100 burpees",
        )
    }

    #[test]
    fn test_builtin_has_all_categories() {
        let catalog = BenchmarkCatalog::builtin();
        for category in BenchmarkCategory::all() {
            assert!(catalog.category(*category).count() > 0, "{category} empty");
        }
    }

    #[test]
    fn test_builtin_order_is_girls_heroes_notables() {
        let catalog = BenchmarkCatalog::builtin();
        let categories: Vec<_> = catalog.benchmarks().iter().map(|b| b.category).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
    }

    #[test]
    fn test_find_exact_is_normalized() {
        let catalog = BenchmarkCatalog::builtin();
        assert_eq!(catalog.find_exact("fran").unwrap().name, "Fran");
        assert_eq!(catalog.find_exact("fight gone bad").unwrap().name, "Fight Gone Bad");
        assert!(catalog.find_exact("Fran").is_none()); // callers pass normalized keys
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = BenchmarkCatalog::new(vec![], vec![], vec![]);
        assert!(matches!(result, Err(WodError::EmptyCatalog)));
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = BenchmarkCatalog::new(vec![girl("Fran"), girl("FRAN")], vec![], vec![]);
        assert!(matches!(result, Err(WodError::DuplicateBenchmark { .. })));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = BenchmarkCatalog::new(vec![girl("!!!")], vec![], vec![]);
        assert!(matches!(result, Err(WodError::EmptyBenchmarkName { .. })));
    }

    #[test]
    fn test_category_taken_from_list() {
        let catalog = BenchmarkCatalog::new(vec![], vec![girl("Murph")], vec![]).unwrap();
        assert_eq!(catalog.benchmarks()[0].category, BenchmarkCategory::Heroes);
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "girls": [
                {"id": "g1", "name": "Fran", "description": "21-15-9 for time", "type": "for_time", "scoring": "Time"}
            ],
            "heroes": [
                {"name": "Murph", "canonicalDescription": "For time: 1 mile run", "workoutType": "for_time", "timeCapSeconds": 3600}
            ]
        }"#;

        let catalog = BenchmarkCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        let murph = catalog.find_exact("murph").unwrap();
        assert_eq!(murph.category, BenchmarkCategory::Heroes);
        assert_eq!(murph.time_cap_seconds, Some(3600));
        assert_eq!(catalog.find_exact("fran").unwrap().id.as_deref(), Some("g1"));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_from_yaml_str() {
        let yaml = r#"
notables:
  - name: Filthy Fifty
    description: "For time: 50 box jumps"
    type: chipper
    scoring: Time
"#;
        let catalog = BenchmarkCatalog::from_yaml_str(yaml).unwrap();
        let entry = catalog.find_exact("filthy fifty").unwrap();
        assert_eq!(entry.workout_type, WorkoutType::Chipper);
        assert_eq!(entry.category, BenchmarkCategory::Notables);
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = BenchmarkCatalog::from_path("/nonexistent/catalog.json");
        assert!(matches!(result, Err(WodError::Io(_))));
    }
}
