//! Derived read-only computations over stored entities
//!
//! Everything here is pure. The store feeds in counts and timestamps it has
//! already read; nothing in this module touches the database.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Exercise;

/// Rough time spent performing one round, used for duration estimates
pub const SECONDS_PER_ROUND_ESTIMATE: u64 = 30;

/// Share of completed exercises as a whole percentage in `[0, 100]`
///
/// Rounds half to even, so 2.5% reports 2 and 3.5% reports 4. Returns 0
/// when either count is zero and clamps at 100 when more codes were
/// completed than the set currently holds.
pub fn completion_percentage(completed: usize, total: usize) -> u8 {
    if total == 0 || completed == 0 {
        return 0;
    }
    let ratio = completed as f64 / total as f64 * 100.0;
    ratio.round_ties_even().min(100.0) as u8
}

/// Calendar days between `last` and `now`, counted on `now`'s local dates
///
/// A workout at 23:00 yesterday seen at 01:00 today is 1 day ago.
/// Timestamps in the future give a negative count.
pub fn days_since_at<Tz: TimeZone>(last: DateTime<Utc>, now: &DateTime<Tz>) -> i64 {
    let last_local = last.with_timezone(&now.timezone());
    (now.date_naive() - last_local.date_naive()).num_days()
}

/// [`days_since_at`] against the system clock and time zone
pub fn days_since(last: DateTime<Utc>) -> i64 {
    days_since_at(last, &Local::now())
}

/// Render a duration as `H:MM:SS`, or `M:SS` below one hour
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

/// Aggregate figures shown on a workout set card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkoutSetSummary {
    pub exercise_count: usize,
    pub total_rounds: u64,
    /// Rest between rounds only; no rest after the last round
    pub total_rest_seconds: u64,
    pub estimated_minutes: u64,
}

impl WorkoutSetSummary {
    pub fn from_exercises(exercises: &[Exercise]) -> Self {
        let total_rounds: u64 = exercises.iter().map(|e| u64::from(e.round_count)).sum();
        let total_rest_seconds: u64 = exercises
            .iter()
            .map(|e| u64::from(e.rest_seconds) * u64::from(e.round_count.saturating_sub(1)))
            .sum();
        let total_seconds = total_rest_seconds + total_rounds * SECONDS_PER_ROUND_ESTIMATE;
        let estimated_minutes = (total_seconds as f64 / 60.0).round_ties_even() as u64;

        Self {
            exercise_count: exercises.len(),
            total_rounds,
            total_rest_seconds,
            estimated_minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_percentage_examples() {
        assert_eq!(completion_percentage(3, 4), 75);
        assert_eq!(completion_percentage(0, 4), 0);
        assert_eq!(completion_percentage(3, 0), 0);
        assert_eq!(completion_percentage(5, 4), 100);
        assert_eq!(completion_percentage(1, 3), 33);
        assert_eq!(completion_percentage(2, 3), 67);
    }

    #[test]
    fn test_percentage_rounds_half_to_even() {
        // 1/8 = 12.5%, 3/8 = 37.5%
        assert_eq!(completion_percentage(1, 8), 12);
        assert_eq!(completion_percentage(3, 8), 38);
    }

    #[test]
    fn test_days_since_uses_local_dates() {
        let tz = FixedOffset::east_opt(3 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2024, 5, 10, 1, 0, 0).unwrap();
        // 23:00 local on May 9
        let last = tz
            .with_ymd_and_hms(2024, 5, 9, 23, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(days_since_at(last, &now), 1);
    }

    #[test]
    fn test_days_since_same_day_is_zero() {
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2024, 5, 10, 22, 0, 0).unwrap();
        let last = tz
            .with_ymd_and_hms(2024, 5, 10, 0, 5, 0)
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(days_since_at(last, &now), 0);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(75), "1:15");
        assert_eq!(format_duration(3600), "1:00:00");
        assert_eq!(format_duration(3725), "1:02:05");
    }
}
