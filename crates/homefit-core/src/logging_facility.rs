//! Structured logging facility for Homefit
//!
//! - one initialization point via `init(profile)`
//! - lifecycle macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - an in-memory capture layer for test assertions
//!
//! The engine owns the lifecycle events of every operation. The store only
//! emits `debug!` details and `warn!` for degraded reads and safety copies.
//!
//! ```rust
//! use homefit_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
