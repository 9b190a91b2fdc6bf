//! Entity stores
//!
//! Each store is a stateless unit struct whose functions take the
//! connection for the current operation. Mutations report a missing row as
//! `Ok(false)`; errors are reserved for engine and I/O failures and for
//! input that breaks a data-model invariant.

mod exercise_store;
mod user_prefs_store;
mod workout_log_store;
mod workout_set_store;

pub use exercise_store::ExerciseStore;
pub use user_prefs_store::UserPrefsStore;
pub use workout_log_store::WorkoutLogStore;
pub use workout_set_store::WorkoutSetStore;

#[cfg(test)]
pub(crate) mod test_support {
    use rusqlite::Connection;

    pub fn setup_test_db() -> Connection {
        let mut conn = crate::db::open_in_memory().unwrap();
        crate::db::configure(&conn).unwrap();
        crate::migrations::apply_migrations(&mut conn).unwrap();
        conn
    }
}
