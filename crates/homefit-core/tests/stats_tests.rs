#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::{Duration, FixedOffset, TimeZone, Utc};
use homefit_core::model::Exercise;
use homefit_core::stats::{
    completion_percentage, days_since, days_since_at, format_duration, WorkoutSetSummary,
};
use proptest::prelude::*;

fn exercise(round_count: u32, rest_seconds: u32) -> Exercise {
    let now = Utc::now();
    Exercise {
        code: homefit_core::new_code(),
        workoutset_code: "ws".to_string(),
        name: "Ex".to_string(),
        description: None,
        images: Vec::new(),
        video_url: None,
        repeat_count: 10,
        round_count,
        rest_seconds,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_summary_of_empty_set() {
    let summary = WorkoutSetSummary::from_exercises(&[]);
    assert_eq!(summary, WorkoutSetSummary::default());
}

#[test]
fn test_summary_counts_rest_between_rounds_only() {
    // 3 rounds with 60s rest: 2 rests
    // 1 round with 90s rest: no rest
    let exercises = vec![exercise(3, 60), exercise(1, 90)];
    let summary = WorkoutSetSummary::from_exercises(&exercises);

    assert_eq!(summary.exercise_count, 2);
    assert_eq!(summary.total_rounds, 4);
    assert_eq!(summary.total_rest_seconds, 120);
    // (120 + 4 * 30) / 60 = 4
    assert_eq!(summary.estimated_minutes, 4);
}

#[test]
fn test_summary_estimate_rounds_half_to_even() {
    // 1 round, no rest: 30s = 0.5 min
    let summary = WorkoutSetSummary::from_exercises(&[exercise(1, 0)]);
    assert_eq!(summary.estimated_minutes, 0);

    // 3 rounds, no rest: 90s = 1.5 min
    let summary = WorkoutSetSummary::from_exercises(&[exercise(3, 0)]);
    assert_eq!(summary.estimated_minutes, 2);
}

#[test]
fn test_days_since_across_local_midnight() {
    let tz = FixedOffset::east_opt(9 * 3600).unwrap();
    let last = tz
        .with_ymd_and_hms(2024, 2, 28, 23, 30, 0)
        .unwrap()
        .with_timezone(&Utc);
    let now = tz.with_ymd_and_hms(2024, 3, 1, 0, 10, 0).unwrap();
    // leap year: Feb 28 -> Feb 29 -> Mar 1
    assert_eq!(days_since_at(last, &now), 2);
}

#[test]
fn test_days_since_same_utc_instant_differs_by_zone() {
    let last = Utc.with_ymd_and_hms(2024, 6, 1, 22, 0, 0).unwrap();
    let now_utc = Utc.with_ymd_and_hms(2024, 6, 2, 1, 0, 0).unwrap();

    assert_eq!(days_since_at(last, &now_utc), 1);

    // In UTC+5 both instants fall on June 2
    let tz = FixedOffset::east_opt(5 * 3600).unwrap();
    assert_eq!(days_since_at(last, &now_utc.with_timezone(&tz)), 0);
}

#[test]
fn test_days_since_recent_workout_is_small() {
    let last = Utc::now() - Duration::minutes(1);
    let days = days_since(last);
    assert!((0..=1).contains(&days));
}

#[test]
fn test_format_duration_boundaries() {
    assert_eq!(format_duration(59), "0:59");
    assert_eq!(format_duration(3599), "59:59");
    assert_eq!(format_duration(36_000), "10:00:00");
}

proptest! {
    #[test]
    fn prop_percentage_always_in_range(completed in 0usize..500, total in 0usize..500) {
        let pct = completion_percentage(completed, total);
        prop_assert!(pct <= 100);
    }

    #[test]
    fn prop_percentage_full_when_all_completed(total in 1usize..500) {
        prop_assert_eq!(completion_percentage(total, total), 100);
    }

    #[test]
    fn prop_percentage_monotonic_in_completed(completed in 0usize..200, total in 1usize..200) {
        let a = completion_percentage(completed, total);
        let b = completion_percentage(completed + 1, total);
        prop_assert!(a <= b);
    }
}
