use crate::Database;
use homefit_store::errors::Result;
use homefit_store::SchemaManager;

impl Database {
    /// Create the database if absent; `force_recreate` wipes it first
    ///
    /// Returns whether a new file was created.
    ///
    /// # Errors
    /// Any file system or engine failure. Treat as fatal.
    pub fn initialize(&self, force_recreate: bool) -> Result<bool> {
        self.logged("initialize", || {
            SchemaManager::initialize(&self.config().db_path, force_recreate)
        })
    }

    /// Additive upgrade of an existing database, creating it if absent
    ///
    /// Returns the columns added, as `table.column`.
    ///
    /// # Errors
    /// Any file system or engine failure.
    pub fn migrate(&self) -> Result<Vec<String>> {
        self.logged("migrate", || SchemaManager::migrate(&self.config().db_path))
    }
}
