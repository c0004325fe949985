use std::sync::Arc;

use pretty_assertions::assert_eq;
use wodparse::{
    catalog::{BenchmarkCatalog, BenchmarkCategory, BenchmarkSource},
    config::ParserConfig,
    model::EntityCategory,
    parser::WorkoutParser,
    WodError,
};

#[test]
fn test_every_benchmark_matches_exactly() {
    let catalog = BenchmarkCatalog::builtin();
    let parser = WorkoutParser::default();

    for benchmark in catalog.benchmarks() {
        let input = format!("{}\n{}", benchmark.name, benchmark.canonical_description);
        let result = parser.parse_text(&input);

        assert!(result.workout_found, "{} not found", benchmark.name);
        let entity = &result.workout_entities[0];
        assert_eq!(entity.name, benchmark.name);
        assert_eq!(entity.category, EntityCategory::from(benchmark.category));
        assert_eq!(entity.workout_type, benchmark.workout_type);
        assert!(entity.confidence >= 90, "{} scored {}", benchmark.name, entity.confidence);
        assert!(result.confidence >= 90);
    }
}

#[test]
fn test_decorated_names_still_match() {
    let parser = WorkoutParser::default();

    for input in [
        "\"FRAN\"\n21-15-9",
        "**Fight-Gone-Bad**\n3 rounds",
        "Workout: Murph\nFor time",
        "Tommy V (Hero WOD)\nFor time",
        "  the chief:  \nAMRAP",
    ] {
        let result = parser.parse_text(input);
        assert!(result.workout_found, "{input:?}");
        assert!(
            !result.workout_entities[0].category.is_custom(),
            "{input:?} -> {:?}",
            result.workout_entities[0]
        );
    }
}

#[test]
fn test_catalogue_from_json_file_contents() {
    let json = r#"{
        "girls": [
            {"id": "b-1", "name": "Bella", "description": "AMRAP 10 minutes: 10 burpees", "type": "amrap", "scoring": "Rounds"}
        ],
        "heroes": [
            {"name": "Sentinel", "description": "For time: 5 mile run", "type": "endurance"}
        ]
    }"#;
    let catalog = BenchmarkCatalog::from_json_str(json).unwrap();
    assert_eq!(catalog.category(BenchmarkCategory::Heroes).count(), 1);

    let parser = WorkoutParser::new(Arc::new(catalog), ParserConfig::default()).unwrap();
    let result = parser.parse_text("Bella");
    let bella = &result.workout_entities[0];

    assert_eq!(bella.database_id.as_deref(), Some("b-1"));
    assert_eq!(bella.workout_description, "AMRAP 10 minutes: 10 burpees");
    assert_eq!(bella.time_cap_seconds, Some(600));
    assert_eq!(bella.scoring.as_deref(), Some("Rounds"));
}

#[cfg(feature = "yaml")]
#[test]
fn test_catalogue_from_yaml() {
    let yaml = r#"
notables:
  - name: Bear Complex
    description: "5 rounds, 7 sets of power clean, front squat, push press, back squat, push press"
    type: strength
    scoring: Load
"#;
    let catalog = BenchmarkCatalog::from_yaml_str(yaml).unwrap();
    let parser = WorkoutParser::new(Arc::new(catalog), ParserConfig::default()).unwrap();

    let result = parser.parse_text("bear complex");
    assert_eq!(result.workout_entities[0].category, EntityCategory::Notables);
    assert_eq!(
        result.workout_entities[0].source_table.as_deref(),
        Some("notable_workouts")
    );
}

#[test]
fn test_invalid_catalogues_fail_at_startup() {
    let duplicate = r#"{"girls": [
        {"name": "Fran", "description": "x", "type": "for_time"},
        {"name": "fran!", "description": "y", "type": "for_time"}
    ]}"#;
    assert!(matches!(
        BenchmarkCatalog::from_json_str(duplicate),
        Err(WodError::DuplicateBenchmark { .. })
    ));

    assert!(matches!(
        BenchmarkCatalog::from_json_str("{}"),
        Err(WodError::EmptyCatalog)
    ));

    assert!(matches!(
        BenchmarkCatalog::from_json_str("not json"),
        Err(WodError::JsonError(_))
    ));
}

#[test]
fn test_same_name_in_two_categories_prefers_catalogue_order() {
    let json = r#"{
        "girls": [{"name": "Nova", "description": "For time: 50 burpees", "type": "for_time"}],
        "notables": [{"name": "Nova", "description": "AMRAP 12: 12 burpees", "type": "amrap"}]
    }"#;
    let catalog = BenchmarkCatalog::from_json_str(json).unwrap();
    let parser = WorkoutParser::new(Arc::new(catalog), ParserConfig::default()).unwrap();

    let result = parser.parse_text("Nova");
    assert_eq!(result.workout_entities[0].category, EntityCategory::Girls);
}
