use crate::Database;
use homefit_store::errors::Result;
use homefit_store::{BackupEntry, DatabaseInfo, RestoreOutcome};
use std::path::{Path, PathBuf};

impl Database {
    /// # Errors
    /// `NotFound` without a live database, `Io` on copy failure.
    pub fn create_backup(&self) -> Result<PathBuf> {
        self.logged("create_backup", || self.backups().create_backup())
    }

    /// # Errors
    /// `NotFound`, `NotADatabase` or `InvalidFormat` for a bad candidate;
    /// the live database is then untouched.
    pub fn restore_from_backup(&self, candidate: &Path) -> Result<RestoreOutcome> {
        self.logged("restore_from_backup", || {
            self.backups().restore_from_backup(candidate)
        })
    }

    /// # Errors
    /// `InvalidInput` for a name outside the backup pattern, otherwise as
    /// [`Database::restore_from_backup`].
    pub fn restore_from_named_backup(&self, filename: &str) -> Result<RestoreOutcome> {
        self.logged("restore_from_named_backup", || {
            self.backups().restore_from_named_backup(filename)
        })
    }

    /// # Errors
    /// `Io` when an existing backup cannot be removed.
    pub fn delete_backup(&self, filename: &str) -> Result<bool> {
        self.logged("delete_backup", || self.backups().delete_backup(filename))
    }

    /// # Errors
    /// `Io` when the backup directory cannot be read.
    pub fn list_backups(&self) -> Result<Vec<BackupEntry>> {
        self.logged("list_backups", || self.backups().list_backups())
    }

    /// # Errors
    /// `Io` when file metadata cannot be read.
    pub fn database_info(&self) -> Result<DatabaseInfo> {
        self.logged("database_info", || self.backups().get_database_info())
    }
}
