use crate::codec::{decode_list, encode_list, from_millis, to_millis};
use crate::errors::{from_rusqlite, Result};
use homefit_core::model::{LogEntry, LogFilter, NewWorkoutLog, WorkoutLog};
use homefit_core::rules::validation::validate_workout_log;
use rusqlite::{Connection, OptionalExtension, Row};

const SELECT_LOG: &str = "SELECT l.code, l.workoutset_code, l.date, l.duration_seconds,
        l.completed_exercises, s.name
     FROM workout_logs l
     LEFT JOIN workout_sets s ON s.code = l.workoutset_code";

fn row_to_entry(row: &Row<'_>) -> rusqlite::Result<LogEntry> {
    let code: String = row.get(0)?;
    let completed: Option<String> = row.get(4)?;
    Ok(LogEntry {
        log: WorkoutLog {
            completed_exercises: decode_list(completed.as_deref(), "completed_exercises", &code),
            code,
            workoutset_code: row.get(1)?,
            date: from_millis(row.get(2)?),
            duration_seconds: row.get(3)?,
        },
        workoutset_name: row.get(5)?,
    })
}

/// Store for completed workouts
///
/// Logs are append-only: there is no update.
pub struct WorkoutLogStore;

impl WorkoutLogStore {
    /// Record a finished workout; the date defaults to now
    ///
    /// The set is not required to exist.
    ///
    /// # Errors
    /// `InvalidInput` for a zero duration, otherwise engine failures.
    pub fn create(conn: &Connection, log: &NewWorkoutLog) -> Result<String> {
        validate_workout_log(log)?;

        let code = homefit_core::new_code();
        let date = log.date.unwrap_or_else(chrono::Utc::now);
        conn.execute(
            "INSERT INTO workout_logs (code, workoutset_code, date, duration_seconds, completed_exercises)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                code,
                log.workoutset_code,
                to_millis(date),
                log.duration_seconds,
                encode_list(&log.completed_exercises),
            ],
        )
        .map_err(from_rusqlite)?;

        tracing::debug!(log_code = %code, workoutset_code = %log.workoutset_code, "workout logged");
        Ok(code)
    }

    /// # Errors
    /// Engine failures.
    pub fn get(conn: &Connection, code: &str) -> Result<Option<WorkoutLog>> {
        let entry = conn
            .query_row(
                &format!("{} WHERE l.code = ?1", SELECT_LOG),
                [code],
                row_to_entry,
            )
            .optional()
            .map_err(from_rusqlite)?;
        Ok(entry.map(|e| e.log))
    }

    /// Logs matching `filter`, most recent first
    ///
    /// # Errors
    /// Engine failures.
    pub fn list(conn: &Connection, filter: &LogFilter) -> Result<Vec<WorkoutLog>> {
        Ok(Self::list_entries(conn, filter)?
            .into_iter()
            .map(|e| e.log)
            .collect())
    }

    /// Like [`WorkoutLogStore::list`], with the name of each log's set
    ///
    /// # Errors
    /// Engine failures.
    pub fn list_entries(conn: &Connection, filter: &LogFilter) -> Result<Vec<LogEntry>> {
        let mut stmt = conn
            .prepare(&format!(
                "{} WHERE (?1 IS NULL OR l.workoutset_code = ?1)
                   AND (?2 IS NULL OR l.date >= ?2)
                 ORDER BY l.date DESC, l.rowid DESC",
                SELECT_LOG
            ))
            .map_err(from_rusqlite)?;
        let entries = stmt
            .query_map(
                rusqlite::params![filter.workoutset_code, filter.since.map(to_millis)],
                row_to_entry,
            )
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(entries)
    }

    /// Most recent log for a set
    ///
    /// # Errors
    /// Engine failures.
    pub fn get_last_for_set(conn: &Connection, workoutset_code: &str) -> Result<Option<WorkoutLog>> {
        let filter = LogFilter::all().for_set(workoutset_code);
        Ok(Self::list(conn, &filter)?.into_iter().next())
    }

    /// # Errors
    /// Engine failures.
    pub fn delete(conn: &Connection, code: &str) -> Result<bool> {
        let changed = conn
            .execute("DELETE FROM workout_logs WHERE code = ?1", [code])
            .map_err(from_rusqlite)?;
        Ok(changed > 0)
    }

    /// Remove the history of one set; returns how many logs were removed
    ///
    /// # Errors
    /// Engine failures.
    pub fn delete_by_workoutset(conn: &Connection, workoutset_code: &str) -> Result<usize> {
        conn.execute(
            "DELETE FROM workout_logs WHERE workoutset_code = ?1",
            [workoutset_code],
        )
        .map_err(from_rusqlite)
    }

    /// Remove all history; returns how many logs were removed
    ///
    /// # Errors
    /// Engine failures.
    pub fn delete_all(conn: &Connection) -> Result<usize> {
        conn.execute("DELETE FROM workout_logs", [])
            .map_err(from_rusqlite)
    }
}
