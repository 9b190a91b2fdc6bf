use crate::codec::{from_millis, to_millis};
use crate::errors::{from_rusqlite, Result};
use homefit_core::model::{WorkoutSet, WorkoutSetFields};
use homefit_core::rules::validation::validate_workout_set;
use rusqlite::{Connection, OptionalExtension, Row};

const SELECT_SET: &str = "SELECT code, name, description, created_at, updated_at FROM workout_sets";

fn row_to_set(row: &Row<'_>) -> rusqlite::Result<WorkoutSet> {
    Ok(WorkoutSet {
        code: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        created_at: from_millis(row.get(3)?),
        updated_at: from_millis(row.get(4)?),
    })
}

/// Store for workout set templates
pub struct WorkoutSetStore;

impl WorkoutSetStore {
    /// Insert a new set and return its generated code
    ///
    /// `created_at` and `updated_at` start out identical.
    ///
    /// # Errors
    /// `InvalidInput` for a blank name, otherwise engine failures.
    pub fn create(conn: &Connection, fields: &WorkoutSetFields) -> Result<String> {
        validate_workout_set(fields)?;

        let code = homefit_core::new_code();
        let now = to_millis(chrono::Utc::now());
        conn.execute(
            "INSERT INTO workout_sets (code, name, description, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?4)",
            rusqlite::params![code, fields.name, fields.description, now],
        )
        .map_err(from_rusqlite)?;

        tracing::debug!(workoutset_code = %code, "workout set inserted");
        Ok(code)
    }

    /// # Errors
    /// Engine failures.
    pub fn get(conn: &Connection, code: &str) -> Result<Option<WorkoutSet>> {
        conn.query_row(&format!("{} WHERE code = ?1", SELECT_SET), [code], row_to_set)
            .optional()
            .map_err(from_rusqlite)
    }

    /// All sets, newest first
    ///
    /// # Errors
    /// Engine failures.
    pub fn list(conn: &Connection) -> Result<Vec<WorkoutSet>> {
        let mut stmt = conn
            .prepare(&format!(
                "{} ORDER BY created_at DESC, rowid DESC",
                SELECT_SET
            ))
            .map_err(from_rusqlite)?;
        let sets = stmt
            .query_map([], row_to_set)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(sets)
    }

    /// Replace name and description
    ///
    /// Returns `false` when no set has this code. The schema trigger
    /// advances `updated_at`.
    ///
    /// # Errors
    /// `InvalidInput` for a blank name, otherwise engine failures.
    pub fn update(conn: &Connection, code: &str, fields: &WorkoutSetFields) -> Result<bool> {
        validate_workout_set(fields)?;

        let changed = conn
            .execute(
                "UPDATE workout_sets SET name = ?1, description = ?2 WHERE code = ?3",
                rusqlite::params![fields.name, fields.description, code],
            )
            .map_err(from_rusqlite)?;
        Ok(changed > 0)
    }

    /// Delete one set; its exercises go with it, its logs stay
    ///
    /// # Errors
    /// Engine failures.
    pub fn delete(conn: &Connection, code: &str) -> Result<bool> {
        let changed = conn
            .execute("DELETE FROM workout_sets WHERE code = ?1", [code])
            .map_err(from_rusqlite)?;
        Ok(changed > 0)
    }

    /// Delete a set together with its logs and exercises, atomically
    ///
    /// Order: logs, then exercises, then the set. Returns `false` (and
    /// changes nothing) when the set does not exist.
    ///
    /// # Errors
    /// Engine failures; the transaction is rolled back.
    pub fn delete_with_history(conn: &mut Connection, code: &str) -> Result<bool> {
        let tx = conn.transaction().map_err(from_rusqlite)?;

        if Self::get(&tx, code)?.is_none() {
            return Ok(false);
        }

        let logs = tx
            .execute("DELETE FROM workout_logs WHERE workoutset_code = ?1", [code])
            .map_err(from_rusqlite)?;
        let exercises = tx
            .execute("DELETE FROM exercises WHERE workoutset_code = ?1", [code])
            .map_err(from_rusqlite)?;
        tx.execute("DELETE FROM workout_sets WHERE code = ?1", [code])
            .map_err(from_rusqlite)?;

        tx.commit().map_err(from_rusqlite)?;

        tracing::debug!(workoutset_code = code, logs, exercises, "workout set removed with history");
        Ok(true)
    }

    /// Number of exercises currently in the set
    ///
    /// # Errors
    /// Engine failures.
    pub fn count_exercises(conn: &Connection, code: &str) -> Result<usize> {
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM exercises WHERE workoutset_code = ?1",
                [code],
                |row| row.get(0),
            )
            .map_err(from_rusqlite)?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}
