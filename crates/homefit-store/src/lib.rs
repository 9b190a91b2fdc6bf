//! Homefit Store - SQLite persistence for workout templates and history
//!
//! Provides:
//! - Connection management and explicit path configuration
//! - Schema manager: embedded migrations plus additive column upgrades
//! - Entity stores for workout sets, exercises, preferences and logs
//! - Statistics helpers that read from the stores
//! - Backup/restore manager working on the whole database file
//! - YAML seed import for demo data

pub mod backup;
pub mod codec;
pub mod config;
pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod schema;
pub mod seed;
pub mod stats;

pub use backup::{BackupEntry, BackupManager, DatabaseInfo, RestoreOutcome};
pub use config::StoreConfig;
pub use errors::Result;
pub use repo::{ExerciseStore, UserPrefsStore, WorkoutLogStore, WorkoutSetStore};
pub use schema::SchemaManager;
