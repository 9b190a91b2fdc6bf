//! Operations on a [`Database`](crate::Database), grouped by concern
//!
//! Each module adds an `impl Database` block. Op names used in log events
//! match the method names.

pub mod backup;
pub mod exercises;
pub mod logs;
pub mod preferences;
pub mod schema;
pub mod seed;
pub mod stats;
pub mod workout_sets;
