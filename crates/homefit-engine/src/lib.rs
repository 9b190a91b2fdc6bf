//! Homefit Engine - operation layer over the store
//!
//! A [`Database`] handle is built from an explicit [`StoreConfig`]. Every
//! operation opens its own connection, runs one store call, and releases
//! the connection on every exit path.
//!
//! ## Logging Ownership
//!
//! The engine owns lifecycle logging for every operation:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! The store only uses `tracing::debug!()` and `tracing::warn!()`.

pub mod commands;
pub mod database;

pub use database::Database;
pub use homefit_store::StoreConfig;
