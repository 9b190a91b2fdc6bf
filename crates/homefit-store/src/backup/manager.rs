use crate::backup::atomic::atomic_copy;
use crate::backup::naming::{backup_filename, is_backup_filename, safety_copy_path, staging_path};
use crate::config::StoreConfig;
use crate::db;
use crate::errors::{
    from_rusqlite, incompatible_timestamps, invalid_backup_format, io_error_at, not_a_database,
    Result,
};
use crate::schema::{SchemaManager, APP_TABLES};
use chrono::{DateTime, Local};
use homefit_core::errors::{ExError, ExErrorKind, HomefitError};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Tables that must be present for a file to be restorable, whatever else
/// is missing
const REQUIRED_TABLES: [&str; 2] = ["workout_sets", "exercises"];
/// Minimum number of the application tables a restorable file carries
const MIN_APP_TABLES: usize = 3;
/// Columns the stores read as Unix milliseconds
const TIMESTAMP_COLUMNS: [(&str, &str); 5] = [
    ("workout_sets", "created_at"),
    ("workout_sets", "updated_at"),
    ("exercises", "created_at"),
    ("exercises", "updated_at"),
    ("workout_logs", "date"),
];

/// One file in the backup directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackupEntry {
    pub filename: String,
    pub path: PathBuf,
    pub size: u64,
    pub modified: DateTime<Local>,
}

/// Snapshot of the live database file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DatabaseInfo {
    pub exists: bool,
    pub size: u64,
    pub modified: Option<DateTime<Local>>,
    pub tables_count: usize,
    /// Row count per table, internal SQLite tables excluded
    pub records_count: BTreeMap<String, i64>,
}

/// Result of a successful restore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreOutcome {
    /// Copy of the database as it was before the restore, when one existed
    pub safety_copy: Option<PathBuf>,
    /// Columns the restored file was missing and that were added
    pub added_columns: Vec<String>,
}

/// Backup, restore and inspection of the database file
pub struct BackupManager {
    config: StoreConfig,
}

impl BackupManager {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Copy the live database to `<backup_dir>/<prefix>_<YYYYMMDD_HHMMSS>.db`
    ///
    /// Two backups within the same second share a name; the later one
    /// replaces the earlier.
    ///
    /// # Errors
    /// `NotFound` when there is no live database (nothing is created in the
    /// backup directory), `Io` when the copy fails.
    pub fn create_backup(&self) -> Result<PathBuf> {
        let db_path = &self.config.db_path;
        if !db_path.is_file() {
            return Err(ExError::from(HomefitError::DatabaseMissing {
                path: db_path.clone(),
            })
            .with_op("create_backup"));
        }

        let target = self
            .config
            .backup_dir
            .join(backup_filename(&self.config.backup_prefix, &Local::now()));
        let size = atomic_copy(db_path, &target)?;

        tracing::debug!(backup_path = %target.display(), size, "backup written");
        Ok(target)
    }

    /// Replace the live database with `candidate`
    ///
    /// The candidate must be an SQLite file holding at least three of the
    /// four application tables, including `workout_sets` and `exercises`.
    /// It is copied to a staging file next to the database, migrated there
    /// and checked for integer millisecond timestamps. Only then is the
    /// live database, if any, copied to `<db file>.backup_<YYYYMMDD_HHMMSS>`
    /// and the staging file renamed over it.
    ///
    /// # Errors
    /// `NotFound` for a missing candidate, `NotADatabase` for a non-SQLite
    /// file, `InvalidFormat` when tables are missing or timestamps are not
    /// integers (for example text dates), `Persistence` when the candidate
    /// cannot be migrated, `Io` on copy failure. On every error the live
    /// database is left as it was.
    pub fn restore_from_backup(&self, candidate: &Path) -> Result<RestoreOutcome> {
        if !candidate.is_file() {
            return Err(ExError::from(HomefitError::BackupNotFound {
                path: candidate.to_path_buf(),
            })
            .with_op("restore_from_backup"));
        }

        Self::validate_candidate(candidate)?;

        let db_path = &self.config.db_path;
        let staging = staging_path(db_path);
        let result = Self::stage_candidate(candidate, &staging)
            .and_then(|added_columns| self.swap_in(&staging, added_columns));
        if result.is_err() {
            let _ = fs::remove_file(&staging);
        }
        result
    }

    /// Copy, migrate and check the candidate without touching the live file
    fn stage_candidate(candidate: &Path, staging: &Path) -> Result<Vec<String>> {
        atomic_copy(candidate, staging)?;
        let added_columns = SchemaManager::migrate(staging)?;

        let conn = db::open_read_only(staging)?;
        let text_columns = Self::non_integer_timestamps(&conn)?;
        if !text_columns.is_empty() {
            return Err(incompatible_timestamps(candidate, &text_columns));
        }
        Ok(added_columns)
    }

    fn swap_in(&self, staging: &Path, added_columns: Vec<String>) -> Result<RestoreOutcome> {
        let db_path = &self.config.db_path;
        let safety_copy = if db_path.is_file() {
            let path = safety_copy_path(db_path, &Local::now());
            atomic_copy(db_path, &path)?;
            tracing::warn!(backup_path = %path.display(), "live database saved before restore");
            Some(path)
        } else {
            None
        };

        fs::rename(staging, db_path).map_err(|e| io_error_at("restore_from_backup", db_path, e))?;

        Ok(RestoreOutcome {
            safety_copy,
            added_columns,
        })
    }

    /// Restore from a file in the backup directory, by name
    ///
    /// # Errors
    /// `InvalidInput` when `filename` is not a backup name, otherwise as
    /// [`BackupManager::restore_from_backup`].
    pub fn restore_from_named_backup(&self, filename: &str) -> Result<RestoreOutcome> {
        if !is_backup_filename(&self.config.backup_prefix, filename) {
            return Err(ExError::new(ExErrorKind::InvalidInput)
                .with_op("restore_from_named_backup")
                .with_message(format!("'{}' is not a backup file name", filename)));
        }
        self.restore_from_backup(&self.config.backup_dir.join(filename))
    }

    /// Delete one backup by file name
    ///
    /// Returns `false` without touching anything when the name does not
    /// match the backup pattern or no such file exists.
    ///
    /// # Errors
    /// `Io` when the file exists but cannot be removed.
    pub fn delete_backup(&self, filename: &str) -> Result<bool> {
        if !is_backup_filename(&self.config.backup_prefix, filename) {
            return Ok(false);
        }
        let path = self.config.backup_dir.join(filename);
        if !path.is_file() {
            return Ok(false);
        }
        fs::remove_file(&path).map_err(|e| io_error_at("delete_backup", &path, e))?;
        Ok(true)
    }

    /// Backups in the backup directory, newest first
    ///
    /// A missing directory is an empty list.
    ///
    /// # Errors
    /// `Io` when the directory exists but cannot be read.
    pub fn list_backups(&self) -> Result<Vec<BackupEntry>> {
        let dir = &self.config.backup_dir;
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| io_error_at("list_backups", dir, e))? {
            let entry = entry.map_err(|e| io_error_at("list_backups", dir, e))?;
            let filename = entry.file_name().to_string_lossy().into_owned();
            if !is_backup_filename(&self.config.backup_prefix, &filename) {
                continue;
            }
            let path = entry.path();
            let metadata = entry
                .metadata()
                .map_err(|e| io_error_at("list_backups", &path, e))?;
            if !metadata.is_file() {
                continue;
            }
            let modified = metadata
                .modified()
                .map_err(|e| io_error_at("list_backups", &path, e))?;

            backups.push(BackupEntry {
                filename,
                path,
                size: metadata.len(),
                modified: DateTime::<Local>::from(modified),
            });
        }

        backups.sort_by(|a, b| {
            b.modified
                .cmp(&a.modified)
                .then_with(|| b.filename.cmp(&a.filename))
        });
        Ok(backups)
    }

    /// Size, modification time and row counts of the live database
    ///
    /// A missing file is reported with `exists == false`. An unreadable
    /// database reports its file facts with empty counts.
    ///
    /// # Errors
    /// `Io` when file metadata cannot be read.
    pub fn get_database_info(&self) -> Result<DatabaseInfo> {
        let db_path = &self.config.db_path;
        if !db_path.is_file() {
            return Ok(DatabaseInfo::default());
        }

        let metadata =
            fs::metadata(db_path).map_err(|e| io_error_at("get_database_info", db_path, e))?;
        let modified = metadata.modified().ok().map(DateTime::<Local>::from);

        let records_count = match Self::count_records(db_path) {
            Ok(counts) => counts,
            Err(e) => {
                tracing::debug!(db_path = %db_path.display(), error = %e, "row counts unavailable");
                BTreeMap::new()
            }
        };

        Ok(DatabaseInfo {
            exists: true,
            size: metadata.len(),
            modified,
            tables_count: records_count.len(),
            records_count,
        })
    }

    fn count_records(db_path: &Path) -> Result<BTreeMap<String, i64>> {
        let conn = db::open_read_only(db_path)?;
        let mut stmt = conn
            .prepare(
                "SELECT name FROM sqlite_master
                 WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
                 ORDER BY name",
            )
            .map_err(from_rusqlite)?;
        let tables = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        let mut counts = BTreeMap::new();
        for table in tables {
            let count: i64 = conn
                .query_row(
                    &format!("SELECT COUNT(*) FROM \"{}\"", table.replace('"', "\"\"")),
                    [],
                    |row| row.get(0),
                )
                .map_err(from_rusqlite)?;
            counts.insert(table, count);
        }
        Ok(counts)
    }

    /// `table.column` for each timestamp column holding a non-integer value
    fn non_integer_timestamps(conn: &rusqlite::Connection) -> Result<Vec<String>> {
        let mut found = Vec::new();
        for (table, column) in TIMESTAMP_COLUMNS {
            let bad: bool = conn
                .query_row(
                    &format!(
                        "SELECT EXISTS(SELECT 1 FROM {table} WHERE typeof({column}) <> 'integer')"
                    ),
                    [],
                    |row| row.get(0),
                )
                .map_err(from_rusqlite)?;
            if bad {
                found.push(format!("{}.{}", table, column));
            }
        }
        Ok(found)
    }

    fn validate_candidate(candidate: &Path) -> Result<()> {
        let present = db::open_read_only(candidate)
            .and_then(|conn| SchemaManager::present_tables(&conn))
            .map_err(|e| match e.kind() {
                ExErrorKind::NotADatabase => not_a_database(candidate, e.message()),
                _ => e,
            })?;

        let missing: Vec<String> = APP_TABLES
            .iter()
            .filter(|t| !present.iter().any(|p| p == *t))
            .map(|t| t.to_string())
            .collect();
        let lacks_required = REQUIRED_TABLES
            .iter()
            .any(|t| missing.iter().any(|m| m == t));

        if present.len() < MIN_APP_TABLES || lacks_required {
            return Err(invalid_backup_format(candidate, missing));
        }
        Ok(())
    }
}
