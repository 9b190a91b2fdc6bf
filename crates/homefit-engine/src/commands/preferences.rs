use crate::Database;
use homefit_core::model::{PrefsFields, UserPrefs};
use homefit_store::errors::Result;
use homefit_store::UserPrefsStore;

impl Database {
    /// The current preferences row, if one was ever saved
    ///
    /// # Errors
    /// `NotFound` without a database, engine failures.
    pub fn get_preferences(&self) -> Result<Option<UserPrefs>> {
        self.with_connection("get_preferences", |conn| UserPrefsStore::get_first(conn))
    }

    /// Stored defaults, or the built-in ones when nothing is stored
    ///
    /// # Errors
    /// `NotFound` without a database, engine failures.
    pub fn get_default_settings(&self) -> Result<PrefsFields> {
        self.with_connection("get_default_settings", |conn| {
            UserPrefsStore::get_defaults(conn)
        })
    }

    /// Create or update the single preferences row
    ///
    /// # Errors
    /// `NotFound` without a database, engine failures.
    pub fn save_preferences(&self, fields: &PrefsFields) -> Result<String> {
        self.with_connection("save_preferences", |conn| {
            UserPrefsStore::upsert(conn, fields)
        })
    }

    /// # Errors
    /// `NotFound` without a database, engine failures.
    pub fn update_preferences(&self, code: &str, fields: &PrefsFields) -> Result<bool> {
        self.with_connection("update_preferences", |conn| {
            UserPrefsStore::update(conn, code, fields)
        })
    }
}
