use crate::Database;
use homefit_core::model::{WorkoutSet, WorkoutSetFields};
use homefit_store::errors::Result;
use homefit_store::WorkoutSetStore;

impl Database {
    /// # Errors
    /// `InvalidInput` for a blank name, `NotFound` without a database.
    pub fn create_workout_set(&self, fields: &WorkoutSetFields) -> Result<String> {
        self.with_connection("create_workout_set", |conn| {
            WorkoutSetStore::create(conn, fields)
        })
    }

    /// # Errors
    /// `NotFound` without a database, engine failures.
    pub fn get_workout_set(&self, code: &str) -> Result<Option<WorkoutSet>> {
        self.with_connection("get_workout_set", |conn| WorkoutSetStore::get(conn, code))
    }

    /// Newest first
    ///
    /// # Errors
    /// `NotFound` without a database, engine failures.
    pub fn list_workout_sets(&self) -> Result<Vec<WorkoutSet>> {
        self.with_connection("list_workout_sets", |conn| WorkoutSetStore::list(conn))
    }

    /// # Errors
    /// `InvalidInput` for a blank name, `NotFound` without a database.
    pub fn update_workout_set(&self, code: &str, fields: &WorkoutSetFields) -> Result<bool> {
        self.with_connection("update_workout_set", |conn| {
            WorkoutSetStore::update(conn, code, fields)
        })
    }

    /// Delete a set and, through the cascade, its exercises. Logs remain.
    ///
    /// # Errors
    /// `NotFound` without a database, engine failures.
    pub fn delete_workout_set(&self, code: &str) -> Result<bool> {
        self.with_connection("delete_workout_set", |conn| {
            WorkoutSetStore::delete(conn, code)
        })
    }

    /// Delete a set with its logs and exercises in one transaction
    ///
    /// # Errors
    /// `NotFound` without a database, engine failures.
    pub fn delete_workout_set_with_history(&self, code: &str) -> Result<bool> {
        self.with_connection("delete_workout_set_with_history", |conn| {
            WorkoutSetStore::delete_with_history(conn, code)
        })
    }

    /// # Errors
    /// `NotFound` without a database, engine failures.
    pub fn count_exercises(&self, workoutset_code: &str) -> Result<usize> {
        self.with_connection("count_exercises", |conn| {
            WorkoutSetStore::count_exercises(conn, workoutset_code)
        })
    }
}
