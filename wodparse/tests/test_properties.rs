use std::{sync::Arc, thread};

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use wodparse::{
    catalog::BenchmarkCatalog,
    config::ParserConfig,
    model::{EntityCategory, WorkoutType},
    parse_workouts,
    parser::WorkoutParser,
    ParseRequest,
};

#[test]
fn test_idempotent_output() {
    let input = "27-June-2025 | Friday\n\nSTRENGTH\nFront Squat 5x3\n\n\
        Fren\n21-15-9\n\nCindy\nAMRAP 20 minutes";
    let first = parse_workouts(input, "u1").to_json().unwrap();
    let second = parse_workouts(input, "u1").to_json().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_segmentation_count_matches_headers() {
    let headers = ["WARM-UP", "STRENGTH", "METCON", "FINISHER", "COOL DOWN"];
    let benchmarks = ["Cindy", "Grace", "Helen", "Karen", "Diane"];

    let input = headers
        .iter()
        .zip(benchmarks)
        .map(|(h, b)| format!("{h}\n{b}"))
        .collect::<Vec<_>>()
        .join("\n");

    let result = parse_workouts(&input, "u1");
    let names: Vec<&str> = result
        .workout_entities
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, benchmarks.to_vec());
}

#[test]
fn test_default_type_without_keywords() {
    let result = parse_workouts("Partner Grind\n100 Burpees\n100 Wall balls", "u1");
    let entity = &result.workout_entities[0];

    assert_eq!(entity.workout_type, WorkoutType::ForTime);
    // Name and body, no type signal
    assert_eq!(entity.confidence, 40);
}

#[test]
fn test_one_typo_suggestions() {
    for (typo, expected) in [
        ("Fren", "Fran"),
        ("Murphy", "Murph"),
        ("Gracee", "Grace"),
        ("Hellen", "Helen"),
    ] {
        let result = parse_workouts(&format!("{typo}\nFor time:\n100 burpees"), "u1");
        assert!(!result.workout_found, "{typo}");
        let suggestions = result.suggested_workouts.unwrap_or_default();
        assert!(
            suggestions.contains(&expected.to_string()),
            "{typo}: {suggestions:?}"
        );
        assert!(suggestions.len() <= 3);
    }
}

#[test]
fn test_extracted_dates_are_iso() {
    let inputs = [
        ("27-June-2025 | Friday\nFran", "2025-06-27"),
        ("2024-02-29\nFran", "2024-02-29"),
        ("Tuesday, January 7th, 2025\nFran", "2025-01-07"),
        ("7/1/2025\nFran", "2025-01-07"),
        ("31-February-2025\n1 Mar 2025\nFran", "2025-03-01"),
    ];

    for (input, expected) in inputs {
        let result = parse_workouts(input, "u1");
        let date = result.extracted_date.expect(input);
        assert_eq!(date, expected);
        assert!(NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok());
        assert!(result.workout_found, "{input:?}");
    }
}

#[test]
fn test_invisible_characters_ignored() {
    let result = parse_workouts(
        "\u{FEFF}Fr\u{200B}an\r\n21-15-9 reps for time of:\r\nThrusters",
        "u1",
    );
    assert_eq!(result.workout_entities[0].category, EntityCategory::Girls);
}

#[test]
fn test_accented_name_matches() {
    let result = parse_workouts("Fr\u{e1}n\n21-15-9", "u1");
    assert_eq!(result.workout_entities[0].name, "Fran");
}

#[test]
fn test_community_default_category_config() {
    let config = ParserConfig::new().with_default_custom_category(EntityCategory::CustomCommunity);
    let parser = WorkoutParser::new(BenchmarkCatalog::builtin(), config).unwrap();

    let result = parser.parse_text("Summer Sweat\nAMRAP 20 minutes:\n10 Burpees");
    assert_eq!(result.workout_entities[0].category, EntityCategory::CustomCommunity);
}

#[test]
fn test_extra_section_header() {
    let config = ParserConfig::new().with_section_header("Partner Workout");
    let parser = WorkoutParser::new(BenchmarkCatalog::builtin(), config).unwrap();

    let input = "Grace\n30 Clean and jerks\nPARTNER WORKOUT:\nAMRAP 30 minutes\n10 burpees each";
    let result = parser.parse_text(input);
    assert_eq!(result.workout_entities.len(), 2);
    assert_eq!(result.workout_entities[1].name, "Partner Workout");
}

#[test]
fn test_parser_shared_across_threads() {
    let parser = Arc::new(WorkoutParser::default());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let parser = Arc::clone(&parser);
            thread::spawn(move || {
                let request = ParseRequest::new(
                    "Helen\n3 rounds for time of:\n400 meter run",
                    format!("user-{i}"),
                );
                parser.parse(&request)
            })
        })
        .collect();

    for handle in handles {
        let result = handle.join().unwrap();
        assert_eq!(result.workout_entities[0].name, "Helen");
    }
}
