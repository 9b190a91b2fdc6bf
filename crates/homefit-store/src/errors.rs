//! Error helpers for homefit-store
//!
//! Wraps the core `ExError` with store-specific constructors

use homefit_core::errors::{ExError, ExErrorKind, HomefitError};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Recorded checksum no longer matches the embedded migration
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a seed validation error
pub fn seed_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("seed_parse")
        .with_message(reason.to_string())
}

/// Candidate restore file is SQLite but lacks application tables
pub fn invalid_backup_format(path: &Path, missing_tables: Vec<String>) -> ExError {
    ExError::from(HomefitError::InvalidBackupFormat {
        path: path.to_path_buf(),
        missing_tables,
    })
    .with_op("restore_from_backup")
}

/// Candidate restore file stores timestamps the stores cannot read
pub fn incompatible_timestamps(path: &Path, columns: &[String]) -> ExError {
    ExError::new(ExErrorKind::InvalidFormat)
        .with_op("restore_from_backup")
        .with_path(path)
        .with_message(format!(
            "Backup holds non-integer timestamps in {}",
            columns.join(", ")
        ))
}

/// Candidate restore file is not an SQLite database
pub fn not_a_database(path: &Path, reason: impl Into<String>) -> ExError {
    ExError::from(HomefitError::NotADatabase {
        path: path.to_path_buf(),
        reason: reason.into(),
    })
    .with_op("restore_from_backup")
}

/// Convert a rusqlite error
///
/// `SQLITE_NOTADB` is classified separately so callers can tell a garbage
/// file from a genuine engine failure.
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    let kind = match &err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::NotADatabase => {
            ExErrorKind::NotADatabase
        }
        _ => ExErrorKind::Persistence,
    };
    ExError::new(kind)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create an IO error that names the file involved
pub fn io_error_at(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    io_error(operation, err).with_path(path)
}
