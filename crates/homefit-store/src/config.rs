//! Explicit location configuration for the database and its backups

use std::path::{Path, PathBuf};

/// Database file name inside an application root
pub const DEFAULT_DB_FILENAME: &str = "workout_app.db";
/// Backup directory name next to the database file
pub const DEFAULT_BACKUP_DIRNAME: &str = "backups";
/// Prefix of timestamped backup files
pub const DEFAULT_BACKUP_PREFIX: &str = "workout_backup";

/// Where the live database and its backups live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub db_path: PathBuf,
    pub backup_dir: PathBuf,
    pub backup_prefix: String,
}

impl StoreConfig {
    /// Configuration for a database file, with backups in a sibling
    /// `backups/` directory
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        let db_path = db_path.into();
        let backup_dir = db_path
            .parent()
            .map(|p| p.join(DEFAULT_BACKUP_DIRNAME))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BACKUP_DIRNAME));
        Self {
            db_path,
            backup_dir,
            backup_prefix: DEFAULT_BACKUP_PREFIX.to_string(),
        }
    }

    /// `<root>/workout_app.db` with backups in `<root>/backups`
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        Self::new(root.as_ref().join(DEFAULT_DB_FILENAME))
    }

    pub fn with_backup_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.backup_dir = dir.into();
        self
    }

    pub fn with_backup_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.backup_prefix = prefix.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_root_layout() {
        let config = StoreConfig::from_root("/srv/app");
        assert_eq!(config.db_path, PathBuf::from("/srv/app/workout_app.db"));
        assert_eq!(config.backup_dir, PathBuf::from("/srv/app/backups"));
        assert_eq!(config.backup_prefix, "workout_backup");
    }

    #[test]
    fn test_bare_filename_gets_relative_backup_dir() {
        let config = StoreConfig::new("workout_app.db");
        assert_eq!(config.backup_dir, PathBuf::from("backups"));
    }

    #[test]
    fn test_builders_override_defaults() {
        let config = StoreConfig::new("/data/w.db")
            .with_backup_dir("/elsewhere")
            .with_backup_prefix("snap");
        assert_eq!(config.backup_dir, PathBuf::from("/elsewhere"));
        assert_eq!(config.backup_prefix, "snap");
    }
}
