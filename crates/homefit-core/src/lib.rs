//! Homefit Core - domain kernel for the workout tracker
//!
//! This crate provides the I/O-free foundation shared by the store, the
//! engine and the CLI:
//! - WorkoutSet, Exercise, UserPrefs and WorkoutLog models with their field types
//! - The canonical error facility (`ExError` / `ExErrorKind`) and domain errors
//! - Structured logging facility and lifecycle macros
//! - Input validation rules
//! - Pure statistics helpers (completion percentage, day distance, summaries)

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;
pub mod stats;

pub use homefit_core_types as types;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, HomefitError, Result};
pub use model::{
    Exercise, ExerciseFields, LogEntry, LogFilter, NewWorkoutLog, PrefsFields, UserPrefs,
    WorkoutLog, WorkoutSet, WorkoutSetFields,
};

/// Generate a fresh entity code
///
/// Codes are UUID v4 strings: opaque, unique, never reused.
pub fn new_code() -> String {
    uuid::Uuid::new_v4().to_string()
}
