//! Built-in benchmark tables.

use super::{BenchmarkCategory, BenchmarkWorkout};
use crate::model::WorkoutType;

fn entry(
    category: BenchmarkCategory,
    id: &str,
    name: &str,
    workout_type: WorkoutType,
    scoring: &str,
    description: &str,
) -> BenchmarkWorkout {
    BenchmarkWorkout::new(category, name, workout_type, scoring, description).with_id(id)
}

fn girl(
    id: &str,
    name: &str,
    ty: WorkoutType,
    scoring: &str,
    description: &str,
) -> BenchmarkWorkout {
    entry(BenchmarkCategory::Girls, id, name, ty, scoring, description)
}

fn hero(
    id: &str,
    name: &str,
    ty: WorkoutType,
    scoring: &str,
    description: &str,
) -> BenchmarkWorkout {
    entry(BenchmarkCategory::Heroes, id, name, ty, scoring, description)
}

fn notable(
    id: &str,
    name: &str,
    ty: WorkoutType,
    scoring: &str,
    description: &str,
) -> BenchmarkWorkout {
    entry(BenchmarkCategory::Notables, id, name, ty, scoring, description)
}

/// The Girls.
#[rustfmt::skip]
pub(super) fn girls() -> Vec<BenchmarkWorkout> {
    use WorkoutType::*;

    vec![
        girl("girl-angie", "Angie", ForTime, "Time",
            "For time:\n100 Pull-ups\n100 Push-ups\n100 Sit-ups\n100 Squats"),
        girl("girl-barbara", "Barbara", ForTime, "Total time",
            "5 rounds, each for time, of:\n20 Pull-ups\n30 Push-ups\n40 Sit-ups\n50 Squats\nRest precisely 3 minutes between each round"),
        girl("girl-chelsea", "Chelsea", Emom, "Rounds completed",
            "EMOM for 30 minutes:\n5 Pull-ups\n10 Push-ups\n15 Squats")
            .with_time_cap(1800),
        girl("girl-cindy", "Cindy", Amrap, "Rounds + reps",
            "AMRAP in 20 minutes:\n5 Pull-ups\n10 Push-ups\n15 Squats")
            .with_time_cap(1200),
        girl("girl-diane", "Diane", ForTime, "Time",
            "21-15-9 reps for time of:\nDeadlift (225/155 lb)\nHandstand push-ups"),
        girl("girl-elizabeth", "Elizabeth", ForTime, "Time",
            "21-15-9 reps for time of:\nClean (135/95 lb)\nRing dips"),
        girl("girl-fran", "Fran", ForTime, "Time",
            "21-15-9 reps for time of:\nThrusters (95/65 lb)\nPull-ups"),
        girl("girl-grace", "Grace", ForTime, "Time",
            "For time:\n30 Clean and jerks (135/95 lb)"),
        girl("girl-helen", "Helen", ForTime, "Time",
            "3 rounds for time of:\n400 meter run\n21 Kettlebell swings (53/35 lb)\n12 Pull-ups"),
        girl("girl-isabel", "Isabel", ForTime, "Time",
            "For time:\n30 Snatches (135/95 lb)"),
        girl("girl-jackie", "Jackie", ForTime, "Time",
            "For time:\n1000 meter row\n50 Thrusters (45 lb)\n30 Pull-ups"),
        girl("girl-karen", "Karen", ForTime, "Time",
            "For time:\n150 Wall-ball shots (20/14 lb)"),
        girl("girl-linda", "Linda", Ladder, "Time",
            "10-9-8-7-6-5-4-3-2-1 reps for time of:\nDeadlift (1.5 bodyweight)\nBench press (bodyweight)\nClean (3/4 bodyweight)"),
        girl("girl-mary", "Mary", Amrap, "Rounds + reps",
            "AMRAP in 20 minutes:\n5 Handstand push-ups\n10 Pistols\n15 Pull-ups")
            .with_time_cap(1200),
        girl("girl-nancy", "Nancy", ForTime, "Time",
            "5 rounds for time of:\n400 meter run\n15 Overhead squats (95/65 lb)"),
        girl("girl-annie", "Annie", ForTime, "Time",
            "50-40-30-20-10 reps for time of:\nDouble-unders\nSit-ups"),
        girl("girl-eva", "Eva", ForTime, "Time",
            "5 rounds for time of:\n800 meter run\n30 Kettlebell swings (70/53 lb)\n30 Pull-ups"),
        girl("girl-kelly", "Kelly", ForTime, "Time",
            "5 rounds for time of:\n400 meter run\n30 Box jumps (24/20 in)\n30 Wall-ball shots (20/14 lb)"),
        girl("girl-nicole", "Nicole", Amrap, "Total pull-ups",
            "AMRAP in 20 minutes:\n400 meter run\nMax rep pull-ups")
            .with_time_cap(1200),
        girl("girl-amanda", "Amanda", ForTime, "Time",
            "9-7-5 reps for time of:\nMuscle-ups\nSquat snatches (135/95 lb)"),
        girl("girl-gwen", "Gwen", Unbroken, "Load",
            "15-12-9 reps of:\nClean and jerk\nEach set must be unbroken"),
    ]
}

/// The Hero workouts.
#[rustfmt::skip]
pub(super) fn heroes() -> Vec<BenchmarkWorkout> {
    use WorkoutType::*;

    vec![
        hero("hero-murph", "Murph", ForTime, "Time",
            "For time:\n1 mile run\n100 Pull-ups\n200 Push-ups\n300 Squats\n1 mile run\nWear a 20 lb vest if you have one"),
        hero("hero-dt", "DT", ForTime, "Time",
            "5 rounds for time of:\n12 Deadlifts (155/105 lb)\n9 Hang power cleans\n6 Push jerks"),
        hero("hero-jt", "JT", ForTime, "Time",
            "21-15-9 reps for time of:\nHandstand push-ups\nRing dips\nPush-ups"),
        hero("hero-michael", "Michael", ForTime, "Time",
            "3 rounds for time of:\n800 meter run\n50 Back extensions\n50 Sit-ups"),
        hero("hero-badger", "Badger", ForTime, "Time",
            "3 rounds for time of:\n30 Squat cleans (95/65 lb)\n30 Pull-ups\n800 meter run"),
        hero("hero-nate", "Nate", Amrap, "Rounds + reps",
            "AMRAP in 20 minutes:\n2 Muscle-ups\n4 Handstand push-ups\n8 Kettlebell swings (70/53 lb)")
            .with_time_cap(1200),
        hero("hero-randy", "Randy", ForTime, "Time",
            "For time:\n75 Power snatches (75/55 lb)"),
        hero("hero-tommy-v", "Tommy V", ForTime, "Time",
            "For time:\n21 Thrusters (115/75 lb)\n12 Rope climbs\n15 Thrusters\n9 Rope climbs\n9 Thrusters\n6 Rope climbs"),
        hero("hero-kalsu", "Kalsu", ForTime, "Time",
            "For time:\n100 Thrusters (135/95 lb)\nStart with 5 burpees and do 5 burpees at the top of every minute"),
        hero("hero-josh", "Josh", ForTime, "Time",
            "For time:\n21 Overhead squats (95/65 lb)\n42 Pull-ups\n15 Overhead squats\n30 Pull-ups\n9 Overhead squats\n18 Pull-ups"),
        hero("hero-jason", "Jason", ForTime, "Time",
            "For time:\n100 Squats\n5 Muscle-ups\n75 Squats\n10 Muscle-ups\n50 Squats\n15 Muscle-ups\n25 Squats\n20 Muscle-ups"),
        hero("hero-danny", "Danny", Amrap, "Rounds + reps",
            "AMRAP in 20 minutes:\n30 Box jumps (24/20 in)\n20 Push press (115/75 lb)\n30 Pull-ups")
            .with_time_cap(1200),
        hero("hero-hansen", "Hansen", ForTime, "Time",
            "5 rounds for time of:\n30 Kettlebell swings (70/53 lb)\n30 Burpees\n30 GHD sit-ups"),
    ]
}

/// The Notables.
#[rustfmt::skip]
pub(super) fn notables() -> Vec<BenchmarkWorkout> {
    use WorkoutType::*;

    vec![
        notable("notable-fight-gone-bad", "Fight Gone Bad", Interval, "Total reps",
            "3 rounds of 1 minute work at each station, 1 minute rest between rounds:\nWall-ball shots (20/14 lb)\nSumo deadlift high-pull (75/55 lb)\nBox jumps (20 in)\nPush press (75/55 lb)\nRow (calories)"),
        notable("notable-filthy-fifty", "Filthy Fifty", Chipper, "Time",
            "For time:\n50 Box jumps (24/20 in)\n50 Jumping pull-ups\n50 Kettlebell swings (35/26 lb)\n50 Walking lunge steps\n50 Knees-to-elbows\n50 Push press (45/35 lb)\n50 Back extensions\n50 Wall-ball shots (20/14 lb)\n50 Burpees\n50 Double-unders"),
        notable("notable-nasty-girls", "Nasty Girls", ForTime, "Time",
            "3 rounds for time of:\n50 Squats\n7 Muscle-ups\n10 Hang power cleans (135/95 lb)"),
        notable("notable-the-seven", "The Seven", ForTime, "Time",
            "7 rounds for time of:\n7 Handstand push-ups\n7 Thrusters (135/95 lb)\n7 Knees-to-elbows\n7 Deadlifts (245/165 lb)\n7 Burpees\n7 Kettlebell swings (70/53 lb)\n7 Pull-ups"),
        notable("notable-the-chief", "The Chief", Amrap, "Total rounds",
            "5 cycles of a 3 minute AMRAP with 1 minute rest:\n3 Power cleans (135/95 lb)\n6 Push-ups\n9 Squats")
            .with_time_cap(1140),
        notable("notable-lumberjack-20", "Lumberjack 20", Chipper, "Time",
            "For time:\n20 Deadlifts (275/185 lb)\nRun 400 meters\n20 Kettlebell swings (70/53 lb)\nRun 400 meters\n20 Overhead squats (115/75 lb)\nRun 400 meters\n20 Burpees\nRun 400 meters\n20 Pull-ups\nRun 400 meters\n20 Box jumps (24/20 in)\nRun 400 meters"),
        notable("notable-tabata-something-else", "Tabata Something Else", Tabata, "Total reps",
            "Tabata intervals of 20 seconds work and 10 seconds rest, 8 rounds each:\nPull-ups\nPush-ups\nSit-ups\nSquats"),
    ]
}
