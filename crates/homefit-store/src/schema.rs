//! Schema manager: creates, resets and upgrades the database file

use crate::db;
use crate::errors::{io_error_at, Result};
use crate::migrations::{apply_additive_columns, apply_migrations};
use crate::repo::UserPrefsStore;
use homefit_core::model::PrefsFields;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// Application tables every valid database carries
pub const APP_TABLES: [&str; 4] = ["workout_sets", "exercises", "user_prefs", "workout_logs"];

pub struct SchemaManager;

impl SchemaManager {
    /// Create the database file and its tables if absent
    ///
    /// With `force_recreate` the existing file is deleted first. This
    /// destroys all data and is meant for tests and resets only. A fresh
    /// database gets one default preferences row.
    ///
    /// Returns `true` when the file did not exist before the call.
    ///
    /// # Errors
    /// Any file system or engine failure. A failure part way through leaves
    /// whatever was created; callers treat it as fatal.
    pub fn initialize(db_path: &Path, force_recreate: bool) -> Result<bool> {
        if force_recreate && db_path.exists() {
            fs::remove_file(db_path).map_err(|e| io_error_at("initialize", db_path, e))?;
            tracing::debug!(db_path = %db_path.display(), "existing database removed");
        }

        let created = !db_path.exists();
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| io_error_at("initialize", parent, e))?;
        }

        let mut conn = db::open_configured(db_path)?;
        Self::prepare(&mut conn)?;
        Ok(created)
    }

    /// Bring an existing database up to date without destroying data
    ///
    /// Delegates to [`SchemaManager::initialize`] when the file is missing.
    /// Returns the columns that had to be added, as `table.column`.
    ///
    /// # Errors
    /// Any file system or engine failure.
    pub fn migrate(db_path: &Path) -> Result<Vec<String>> {
        if !db_path.exists() {
            Self::initialize(db_path, false)?;
            return Ok(Vec::new());
        }

        let mut conn = db::open_configured(db_path)?;
        Self::migrate_connection(&mut conn)
    }

    /// Migrations plus additive columns on an open connection
    ///
    /// # Errors
    /// Engine failures.
    pub fn migrate_connection(conn: &mut Connection) -> Result<Vec<String>> {
        apply_migrations(conn)?;
        apply_additive_columns(conn)
    }

    /// Full setup of an open connection, including the default prefs row
    ///
    /// # Errors
    /// Engine failures.
    pub fn prepare(conn: &mut Connection) -> Result<()> {
        Self::migrate_connection(conn)?;
        if UserPrefsStore::get_first(conn)?.is_none() {
            UserPrefsStore::create(conn, &PrefsFields::default())?;
        }
        Ok(())
    }

    /// Which of the application tables exist on this connection
    ///
    /// # Errors
    /// Engine failures, including `NotADatabase` for a non-SQLite file.
    pub fn present_tables(conn: &Connection) -> Result<Vec<String>> {
        let mut stmt = conn
            .prepare(
                "SELECT name FROM sqlite_master
                 WHERE type = 'table'
                   AND name IN ('workout_sets', 'exercises', 'user_prefs', 'workout_logs')
                 ORDER BY name",
            )
            .map_err(crate::errors::from_rusqlite)?;
        let names = stmt
            .query_map([], |row| row.get(0))
            .map_err(crate::errors::from_rusqlite)?
            .collect::<std::result::Result<Vec<String>, _>>()
            .map_err(crate::errors::from_rusqlite)?;
        Ok(names)
    }
}
