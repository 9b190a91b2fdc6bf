use crate::Database;
use homefit_core::model::{Exercise, ExerciseFields};
use homefit_store::errors::Result;
use homefit_store::ExerciseStore;

impl Database {
    /// # Errors
    /// `NotFound` when the set or the database is missing, `InvalidInput`
    /// for a blank name or zero rounds.
    pub fn create_exercise(&self, workoutset_code: &str, fields: &ExerciseFields) -> Result<String> {
        self.with_connection("create_exercise", |conn| {
            ExerciseStore::create(conn, workoutset_code, fields)
        })
    }

    /// # Errors
    /// `NotFound` without a database, engine failures.
    pub fn get_exercise(&self, code: &str) -> Result<Option<Exercise>> {
        self.with_connection("get_exercise", |conn| ExerciseStore::get(conn, code))
    }

    /// # Errors
    /// `NotFound` without a database, engine failures.
    pub fn list_exercises(&self, workoutset_code: Option<&str>) -> Result<Vec<Exercise>> {
        self.with_connection("list_exercises", |conn| {
            ExerciseStore::list(conn, workoutset_code)
        })
    }

    /// Exercises of a set in display order (oldest first)
    ///
    /// # Errors
    /// `NotFound` without a database, engine failures.
    pub fn exercises_for_set(&self, workoutset_code: &str) -> Result<Vec<Exercise>> {
        self.with_connection("exercises_for_set", |conn| {
            ExerciseStore::get_by_workoutset(conn, workoutset_code)
        })
    }

    /// # Errors
    /// `InvalidInput` for a blank name or zero rounds, `NotFound` without a
    /// database.
    pub fn update_exercise(&self, code: &str, fields: &ExerciseFields) -> Result<bool> {
        self.with_connection("update_exercise", |conn| {
            ExerciseStore::update(conn, code, fields)
        })
    }

    /// # Errors
    /// `NotFound` without a database, engine failures.
    pub fn revise_exercise_images(
        &self,
        code: &str,
        removed: &[String],
        appended: &[String],
    ) -> Result<bool> {
        self.with_connection("revise_exercise_images", |conn| {
            ExerciseStore::revise_images(conn, code, removed, appended)
        })
    }

    /// # Errors
    /// `NotFound` without a database, engine failures.
    pub fn delete_exercise(&self, code: &str) -> Result<bool> {
        self.with_connection("delete_exercise", |conn| ExerciseStore::delete(conn, code))
    }

    /// # Errors
    /// `NotFound` without a database, engine failures.
    pub fn delete_exercises_for_set(&self, workoutset_code: &str) -> Result<usize> {
        self.with_connection("delete_exercises_for_set", |conn| {
            ExerciseStore::delete_by_workoutset(conn, workoutset_code)
        })
    }
}
