//! Migration framework
//!
//! - embedded SQL migrations recorded with checksums, applied idempotently
//! - additive column upgrades for databases created by older builds

mod additive;
mod checksums;
mod embedded;
mod runner;

pub use additive::{apply_additive_columns, ColumnSpec, ADDITIVE_COLUMNS};
pub use runner::{applied_migrations, apply_migrations};
