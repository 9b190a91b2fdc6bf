//! Statistics read from the stores

use crate::errors::Result;
use crate::repo::{ExerciseStore, WorkoutLogStore, WorkoutSetStore};
use homefit_core::stats::{completion_percentage, days_since, WorkoutSetSummary};
use rusqlite::Connection;

/// Percentage of the set's exercises covered by `completed`, in `[0, 100]`
///
/// Computed against the set's exercise count at call time, not at the time
/// the workout was logged. A set with no exercises reports 0.
///
/// # Errors
/// Engine failures.
pub fn calculate_completion_percentage(
    conn: &Connection,
    workoutset_code: &str,
    completed: &[String],
) -> Result<u8> {
    let total = WorkoutSetStore::count_exercises(conn, workoutset_code)?;
    Ok(completion_percentage(completed.len(), total))
}

/// Local calendar days since the set was last performed
///
/// # Errors
/// Engine failures.
pub fn days_since_last_workout(conn: &Connection, workoutset_code: &str) -> Result<Option<i64>> {
    Ok(WorkoutLogStore::get_last_for_set(conn, workoutset_code)?.map(|log| days_since(log.date)))
}

/// Card figures for a set from its current exercises
///
/// # Errors
/// Engine failures.
pub fn workout_set_summary(conn: &Connection, workoutset_code: &str) -> Result<WorkoutSetSummary> {
    let exercises = ExerciseStore::get_by_workoutset(conn, workoutset_code)?;
    Ok(WorkoutSetSummary::from_exercises(&exercises))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::test_support::setup_test_db;
    use homefit_core::model::{ExerciseFields, NewWorkoutLog, WorkoutSetFields};

    #[test]
    fn test_percentage_against_live_count() {
        let conn = setup_test_db();
        let set = WorkoutSetStore::create(&conn, &WorkoutSetFields::new("S")).unwrap();
        let mut codes = Vec::new();
        for name in ["a", "b", "c", "d"] {
            codes.push(ExerciseStore::create(&conn, &set, &ExerciseFields::new(name)).unwrap());
        }

        assert_eq!(calculate_completion_percentage(&conn, &set, &codes[..3]).unwrap(), 75);

        ExerciseStore::delete(&conn, &codes[3]).unwrap();
        assert_eq!(calculate_completion_percentage(&conn, &set, &codes[..3]).unwrap(), 100);
    }

    #[test]
    fn test_days_since_without_history() {
        let conn = setup_test_db();
        assert_eq!(days_since_last_workout(&conn, "none").unwrap(), None);

        WorkoutLogStore::create(&conn, &NewWorkoutLog::new("ws", 60)).unwrap();
        assert_eq!(days_since_last_workout(&conn, "ws").unwrap(), Some(0));
    }

    #[test]
    fn test_summary_of_stored_set() {
        let conn = setup_test_db();
        let set = WorkoutSetStore::create(&conn, &WorkoutSetFields::new("S")).unwrap();
        ExerciseStore::create(&conn, &set, &ExerciseFields::new("a")).unwrap();
        let summary = workout_set_summary(&conn, &set).unwrap();
        assert_eq!(summary.exercise_count, 1);
        assert_eq!(summary.total_rounds, 3);
        assert_eq!(summary.total_rest_seconds, 120);
    }
}
