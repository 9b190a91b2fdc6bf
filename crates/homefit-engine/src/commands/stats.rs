use crate::Database;
use homefit_core::stats::WorkoutSetSummary;
use homefit_store::errors::Result;
use homefit_store::stats;

impl Database {
    /// # Errors
    /// `NotFound` without a database, engine failures.
    pub fn completion_percentage(&self, workoutset_code: &str, completed: &[String]) -> Result<u8> {
        self.with_connection("completion_percentage", |conn| {
            stats::calculate_completion_percentage(conn, workoutset_code, completed)
        })
    }

    /// `None` when the set has never been performed
    ///
    /// # Errors
    /// `NotFound` without a database, engine failures.
    pub fn days_since_last_workout(&self, workoutset_code: &str) -> Result<Option<i64>> {
        self.with_connection("days_since_last_workout", |conn| {
            stats::days_since_last_workout(conn, workoutset_code)
        })
    }

    /// # Errors
    /// `NotFound` without a database, engine failures.
    pub fn workout_set_summary(&self, workoutset_code: &str) -> Result<WorkoutSetSummary> {
        self.with_connection("workout_set_summary", |conn| {
            stats::workout_set_summary(conn, workoutset_code)
        })
    }
}
