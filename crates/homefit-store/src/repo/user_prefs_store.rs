use crate::errors::{from_rusqlite, Result};
use homefit_core::model::{PrefsFields, UserPrefs};
use rusqlite::{Connection, OptionalExtension, Row};

fn row_to_prefs(row: &Row<'_>) -> rusqlite::Result<UserPrefs> {
    Ok(UserPrefs {
        code: row.get(0)?,
        default_repeat_count: row.get(1)?,
        default_round_count: row.get(2)?,
        default_rest_seconds: row.get(3)?,
        default_warmup_rest_seconds: row.get(4)?,
        timer_sound: row.get(5)?,
        notifications_enabled: row.get(6)?,
    })
}

/// Store for the user's default workout settings
///
/// The table may hold several rows; readers use the first one.
pub struct UserPrefsStore;

impl UserPrefsStore {
    /// The first stored row, if any
    ///
    /// # Errors
    /// Engine failures.
    pub fn get_first(conn: &Connection) -> Result<Option<UserPrefs>> {
        conn.query_row(
            "SELECT code, default_repeat_count, default_round_count, default_rest_seconds,
                    default_warmup_rest_seconds, timer_sound, notifications_enabled
             FROM user_prefs ORDER BY rowid ASC LIMIT 1",
            [],
            row_to_prefs,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Values to pre-fill a new-workout form
    ///
    /// Falls back to [`PrefsFields::default`] when nothing is stored yet.
    ///
    /// # Errors
    /// Engine failures.
    pub fn get_defaults(conn: &Connection) -> Result<PrefsFields> {
        Ok(Self::get_first(conn)?
            .map(|prefs| prefs.fields())
            .unwrap_or_default())
    }

    /// # Errors
    /// Engine failures.
    pub fn create(conn: &Connection, fields: &PrefsFields) -> Result<String> {
        let code = homefit_core::new_code();
        conn.execute(
            "INSERT INTO user_prefs (code, default_repeat_count, default_round_count,
                default_rest_seconds, default_warmup_rest_seconds, timer_sound, notifications_enabled)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            rusqlite::params![
                code,
                fields.default_repeat_count,
                fields.default_round_count,
                fields.default_rest_seconds,
                fields.default_warmup_rest_seconds,
                fields.timer_sound,
                fields.notifications_enabled,
            ],
        )
        .map_err(from_rusqlite)?;
        Ok(code)
    }

    /// # Errors
    /// Engine failures.
    pub fn update(conn: &Connection, code: &str, fields: &PrefsFields) -> Result<bool> {
        let changed = conn
            .execute(
                "UPDATE user_prefs SET default_repeat_count = ?1, default_round_count = ?2,
                    default_rest_seconds = ?3, default_warmup_rest_seconds = ?4,
                    timer_sound = ?5, notifications_enabled = ?6
                 WHERE code = ?7",
                rusqlite::params![
                    fields.default_repeat_count,
                    fields.default_round_count,
                    fields.default_rest_seconds,
                    fields.default_warmup_rest_seconds,
                    fields.timer_sound,
                    fields.notifications_enabled,
                    code,
                ],
            )
            .map_err(from_rusqlite)?;
        Ok(changed > 0)
    }

    /// Update the first row, or create one when the table is empty
    ///
    /// Not atomic on its own; run it inside the caller's transaction.
    ///
    /// # Errors
    /// Engine failures.
    pub fn save_current(conn: &Connection, fields: &PrefsFields) -> Result<String> {
        match Self::get_first(conn)? {
            Some(existing) => {
                Self::update(conn, &existing.code, fields)?;
                Ok(existing.code)
            }
            None => Self::create(conn, fields),
        }
    }

    /// Update the current row or create it when there is none
    ///
    /// Check and write run in one transaction. Returns the row's code.
    ///
    /// # Errors
    /// Engine failures.
    pub fn upsert(conn: &mut Connection, fields: &PrefsFields) -> Result<String> {
        let tx = conn.transaction().map_err(from_rusqlite)?;
        let code = Self::save_current(&tx, fields)?;
        tx.commit().map_err(from_rusqlite)?;
        tracing::debug!(prefs_code = %code, "preferences saved");
        Ok(code)
    }
}
