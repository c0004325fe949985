use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wodparse::{catalog::BenchmarkCatalog, parser::WorkoutParser};

const SINGLE: &str =
    "Fran\n21-15-9 reps for time of:\nThrusters (95/65 lb)\nPull-ups\nTime cap: 8 minutes";

const DAY_LOG: &str = "27-June-2025 | Friday

WARM-UP
3 rounds:
200m row
10 air squats

STRENGTH
Back Squat 5x3 @85%

CONDITIONING
Summer Sweat
AMRAP 20 minutes:
10 Burpees
15 KB Swings
Scoring: total rounds

COOL DOWN
Stretch 10 minutes";

fn bench_parse(c: &mut Criterion) {
    let parser = WorkoutParser::default();

    c.bench_function("parse_single_benchmark", |b| {
        b.iter(|| parser.parse_text(black_box(SINGLE)))
    });

    c.bench_function("parse_day_log", |b| {
        b.iter(|| parser.parse_text(black_box(DAY_LOG)))
    });

    c.bench_function("parse_near_miss", |b| {
        b.iter(|| parser.parse_text(black_box("Fight Gone Good\n3 rounds")))
    });
}

fn bench_catalogue(c: &mut Criterion) {
    let json = serde_json::json!({
        "girls": BenchmarkCatalog::builtin()
            .category(wodparse::catalog::BenchmarkCategory::Girls)
            .map(|b| serde_json::json!({
                "name": b.name,
                "description": b.canonical_description,
                "type": b.workout_type,
            }))
            .collect::<Vec<_>>()
    })
    .to_string();

    c.bench_function("catalogue_from_json", |b| {
        b.iter(|| BenchmarkCatalog::from_json_str(black_box(&json)))
    });
}

criterion_group!(benches, bench_parse, bench_catalogue);
criterion_main!(benches);
