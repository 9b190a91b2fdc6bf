use crate::Database;
use homefit_core::model::{LogEntry, LogFilter, NewWorkoutLog, WorkoutLog};
use homefit_store::errors::Result;
use homefit_store::WorkoutLogStore;

impl Database {
    /// # Errors
    /// `InvalidInput` for a zero duration, `NotFound` without a database.
    pub fn record_workout(&self, log: &NewWorkoutLog) -> Result<String> {
        self.with_connection("record_workout", |conn| WorkoutLogStore::create(conn, log))
    }

    /// # Errors
    /// `NotFound` without a database, engine failures.
    pub fn get_workout_log(&self, code: &str) -> Result<Option<WorkoutLog>> {
        self.with_connection("get_workout_log", |conn| WorkoutLogStore::get(conn, code))
    }

    /// # Errors
    /// `NotFound` without a database, engine failures.
    pub fn list_workout_logs(&self, filter: &LogFilter) -> Result<Vec<WorkoutLog>> {
        self.with_connection("list_workout_logs", |conn| {
            WorkoutLogStore::list(conn, filter)
        })
    }

    /// History listing with set names, most recent first
    ///
    /// # Errors
    /// `NotFound` without a database, engine failures.
    pub fn workout_history(&self, filter: &LogFilter) -> Result<Vec<LogEntry>> {
        self.with_connection("workout_history", |conn| {
            WorkoutLogStore::list_entries(conn, filter)
        })
    }

    /// # Errors
    /// `NotFound` without a database, engine failures.
    pub fn last_workout_for_set(&self, workoutset_code: &str) -> Result<Option<WorkoutLog>> {
        self.with_connection("last_workout_for_set", |conn| {
            WorkoutLogStore::get_last_for_set(conn, workoutset_code)
        })
    }

    /// # Errors
    /// `NotFound` without a database, engine failures.
    pub fn delete_workout_log(&self, code: &str) -> Result<bool> {
        self.with_connection("delete_workout_log", |conn| {
            WorkoutLogStore::delete(conn, code)
        })
    }

    /// # Errors
    /// `NotFound` without a database, engine failures.
    pub fn delete_logs_for_set(&self, workoutset_code: &str) -> Result<usize> {
        self.with_connection("delete_logs_for_set", |conn| {
            WorkoutLogStore::delete_by_workoutset(conn, workoutset_code)
        })
    }

    /// # Errors
    /// `NotFound` without a database, engine failures.
    pub fn clear_history(&self) -> Result<usize> {
        self.with_connection("clear_history", |conn| WorkoutLogStore::delete_all(conn))
    }
}
