use homefit_core::errors::{ExError, HomefitError};
use homefit_core::{log_op_end, log_op_error, log_op_start};
use homefit_store::errors::Result;
use homefit_store::{db, BackupManager, StoreConfig};
use rusqlite::Connection;

/// Handle on one database file and its backup directory
///
/// Holds no connection. Creating the handle touches nothing on disk.
pub struct Database {
    config: StoreConfig,
    backups: BackupManager,
}

impl Database {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            backups: BackupManager::new(config.clone()),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub(crate) fn backups(&self) -> &BackupManager {
        &self.backups
    }

    /// Run `f` with lifecycle logging
    pub(crate) fn logged<T>(&self, op: &'static str, f: impl FnOnce() -> Result<T>) -> Result<T> {
        log_op_start!(op, db_path = %self.config.db_path.display());
        let start = std::time::Instant::now();

        let result = f().map_err(|e| {
            log_op_error!(op, e.clone(), duration_ms = start.elapsed().as_millis() as u64);
            e
        })?;

        log_op_end!(op, duration_ms = start.elapsed().as_millis() as u64);
        Ok(result)
    }

    /// Run `f` on a fresh, configured connection with lifecycle logging
    ///
    /// The database file must already exist; it is never created here.
    pub(crate) fn with_connection<T>(
        &self,
        op: &'static str,
        f: impl FnOnce(&mut Connection) -> Result<T>,
    ) -> Result<T> {
        self.logged(op, || {
            let db_path = &self.config.db_path;
            if !db_path.is_file() {
                return Err(ExError::from(HomefitError::DatabaseMissing {
                    path: db_path.clone(),
                })
                .with_op(op));
            }
            let mut conn = db::open_configured(db_path)?;
            f(&mut conn)
        })
    }
}
