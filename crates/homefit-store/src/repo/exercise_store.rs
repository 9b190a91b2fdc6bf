use crate::codec::{decode_list, encode_list, from_millis, to_millis};
use crate::errors::{from_rusqlite, Result};
use crate::repo::WorkoutSetStore;
use homefit_core::errors::HomefitError;
use homefit_core::model::exercise::revise_images;
use homefit_core::model::{Exercise, ExerciseFields};
use homefit_core::rules::validation::validate_exercise;
use rusqlite::{Connection, OptionalExtension, Row};

const SELECT_EXERCISE: &str = "SELECT code, workoutset_code, name, description, images, video_url,
        repeat_count, round_count, rest_seconds, created_at, updated_at
     FROM exercises";

fn row_to_exercise(row: &Row<'_>) -> rusqlite::Result<Exercise> {
    let code: String = row.get(0)?;
    let images: Option<String> = row.get(4)?;
    Ok(Exercise {
        images: decode_list(images.as_deref(), "images", &code),
        code,
        workoutset_code: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        video_url: row.get(5)?,
        repeat_count: row.get(6)?,
        round_count: row.get(7)?,
        rest_seconds: row.get(8)?,
        created_at: from_millis(row.get(9)?),
        updated_at: from_millis(row.get(10)?),
    })
}

/// Store for the exercises of a workout set
pub struct ExerciseStore;

impl ExerciseStore {
    /// Insert an exercise into an existing set
    ///
    /// # Errors
    /// `NotFound` when the set does not exist, `InvalidInput` for a blank
    /// name or zero rounds, otherwise engine failures.
    pub fn create(conn: &Connection, workoutset_code: &str, fields: &ExerciseFields) -> Result<String> {
        validate_exercise(fields)?;
        if WorkoutSetStore::get(conn, workoutset_code)?.is_none() {
            return Err(HomefitError::WorkoutSetNotFound {
                code: workoutset_code.to_string(),
            }
            .into());
        }

        let code = homefit_core::new_code();
        let now = to_millis(chrono::Utc::now());
        conn.execute(
            "INSERT INTO exercises (code, workoutset_code, name, description, images, video_url,
                repeat_count, round_count, rest_seconds, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)",
            rusqlite::params![
                code,
                workoutset_code,
                fields.name,
                fields.description,
                encode_list(&fields.images),
                fields.video_url,
                fields.repeat_count,
                fields.round_count,
                fields.rest_seconds,
                now,
            ],
        )
        .map_err(from_rusqlite)?;

        tracing::debug!(exercise_code = %code, workoutset_code, "exercise inserted");
        Ok(code)
    }

    /// # Errors
    /// Engine failures.
    pub fn get(conn: &Connection, code: &str) -> Result<Option<Exercise>> {
        conn.query_row(
            &format!("{} WHERE code = ?1", SELECT_EXERCISE),
            [code],
            row_to_exercise,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// All exercises, or those of one set, in creation order
    ///
    /// # Errors
    /// Engine failures.
    pub fn list(conn: &Connection, workoutset_code: Option<&str>) -> Result<Vec<Exercise>> {
        let mut stmt = conn
            .prepare(&format!(
                "{} WHERE (?1 IS NULL OR workoutset_code = ?1)
                 ORDER BY created_at ASC, rowid ASC",
                SELECT_EXERCISE
            ))
            .map_err(from_rusqlite)?;
        let exercises = stmt
            .query_map([workoutset_code], row_to_exercise)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(exercises)
    }

    /// Exercises of one set, oldest first
    ///
    /// Insertion order breaks ties between identical creation times.
    ///
    /// # Errors
    /// Engine failures.
    pub fn get_by_workoutset(conn: &Connection, workoutset_code: &str) -> Result<Vec<Exercise>> {
        Self::list(conn, Some(workoutset_code))
    }

    /// Replace every mutable field
    ///
    /// # Errors
    /// `InvalidInput` for a blank name or zero rounds, otherwise engine
    /// failures.
    pub fn update(conn: &Connection, code: &str, fields: &ExerciseFields) -> Result<bool> {
        validate_exercise(fields)?;

        let changed = conn
            .execute(
                "UPDATE exercises SET name = ?1, description = ?2, images = ?3, video_url = ?4,
                    repeat_count = ?5, round_count = ?6, rest_seconds = ?7
                 WHERE code = ?8",
                rusqlite::params![
                    fields.name,
                    fields.description,
                    encode_list(&fields.images),
                    fields.video_url,
                    fields.repeat_count,
                    fields.round_count,
                    fields.rest_seconds,
                    code,
                ],
            )
            .map_err(from_rusqlite)?;
        Ok(changed > 0)
    }

    /// Drop `removed` paths and append `appended` ones to the image list
    ///
    /// Read and write happen in one transaction.
    ///
    /// # Errors
    /// Engine failures.
    pub fn revise_images(
        conn: &mut Connection,
        code: &str,
        removed: &[String],
        appended: &[String],
    ) -> Result<bool> {
        let tx = conn.transaction().map_err(from_rusqlite)?;

        let Some(exercise) = Self::get(&tx, code)? else {
            return Ok(false);
        };
        let images = revise_images(&exercise.images, removed, appended);
        tx.execute(
            "UPDATE exercises SET images = ?1 WHERE code = ?2",
            rusqlite::params![encode_list(&images), code],
        )
        .map_err(from_rusqlite)?;

        tx.commit().map_err(from_rusqlite)?;
        Ok(true)
    }

    /// # Errors
    /// Engine failures.
    pub fn delete(conn: &Connection, code: &str) -> Result<bool> {
        let changed = conn
            .execute("DELETE FROM exercises WHERE code = ?1", [code])
            .map_err(from_rusqlite)?;
        Ok(changed > 0)
    }

    /// Remove every exercise of a set; returns how many were removed
    ///
    /// # Errors
    /// Engine failures.
    pub fn delete_by_workoutset(conn: &Connection, workoutset_code: &str) -> Result<usize> {
        conn.execute(
            "DELETE FROM exercises WHERE workoutset_code = ?1",
            [workoutset_code],
        )
        .map_err(from_rusqlite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::test_support::setup_test_db;
    use homefit_core::errors::ExErrorKind;
    use homefit_core::model::WorkoutSetFields;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_images_round_trip_in_order() {
        let conn = setup_test_db();
        let set = WorkoutSetStore::create(&conn, &WorkoutSetFields::new("S")).unwrap();
        let fields = ExerciseFields::new("Squat").with_images(["a.png", "b.png"]);
        let code = ExerciseStore::create(&conn, &set, &fields).unwrap();

        let exercise = ExerciseStore::get(&conn, &code).unwrap().unwrap();
        assert_eq!(exercise.images, strings(&["a.png", "b.png"]));
        assert_eq!(exercise.created_at, exercise.updated_at);
    }

    #[test]
    fn test_create_in_missing_set_is_not_found() {
        let conn = setup_test_db();
        let err = ExerciseStore::create(&conn, "ghost", &ExerciseFields::new("Squat")).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::NotFound);
    }

    #[test]
    fn test_malformed_images_degrade_to_empty() {
        let conn = setup_test_db();
        let set = WorkoutSetStore::create(&conn, &WorkoutSetFields::new("S")).unwrap();
        let code = ExerciseStore::create(&conn, &set, &ExerciseFields::new("Squat")).unwrap();
        conn.execute(
            "UPDATE exercises SET images = 'not-a-list' WHERE code = ?1",
            [&code],
        )
        .unwrap();

        let exercise = ExerciseStore::get(&conn, &code).unwrap().unwrap();
        assert!(exercise.images.is_empty());
        assert_eq!(exercise.name, "Squat");
    }

    #[test]
    fn test_revise_images() {
        let mut conn = setup_test_db();
        let set = WorkoutSetStore::create(&conn, &WorkoutSetFields::new("S")).unwrap();
        let fields = ExerciseFields::new("Row").with_images(["a.png", "b.png", "c.png"]);
        let code = ExerciseStore::create(&conn, &set, &fields).unwrap();

        let revised = ExerciseStore::revise_images(
            &mut conn,
            &code,
            &strings(&["a.png"]),
            &strings(&["d.png"]),
        )
        .unwrap();
        assert!(revised);

        let exercise = ExerciseStore::get(&conn, &code).unwrap().unwrap();
        assert_eq!(exercise.images, strings(&["b.png", "c.png", "d.png"]));
        assert!(!ExerciseStore::revise_images(&mut conn, "ghost", &[], &[]).unwrap());
    }
}
