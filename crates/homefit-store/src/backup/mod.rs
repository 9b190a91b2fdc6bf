//! Backup and restore of the whole database file
//!
//! Works on the file independently of the entity stores. Copies are
//! all-or-nothing: data is written to a temporary sibling and renamed into
//! place.

mod atomic;
mod manager;
pub mod naming;

pub use atomic::atomic_copy;
pub use manager::{BackupEntry, BackupManager, DatabaseInfo, RestoreOutcome};
