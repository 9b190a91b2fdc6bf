use crate::Database;
use homefit_store::errors::Result;
use homefit_store::seed::{import_seed, SeedReport};
use std::path::Path;

impl Database {
    /// Import a YAML seed file in one transaction
    ///
    /// # Errors
    /// `InvalidInput` for an invalid seed, `NotFound` without a database.
    pub fn import_seed(&self, path: &Path) -> Result<SeedReport> {
        self.with_connection("import_seed", |conn| import_seed(path, conn))
    }
}
