//! Canonical schema constants for structured logging and events
//!
//! These constants keep log fields consistent between the engine, the store
//! and the CLI.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_WORKOUTSET_CODE: &str = "workoutset_code";
pub const FIELD_EXERCISE_CODE: &str = "exercise_code";
pub const FIELD_LOG_CODE: &str = "log_code";
pub const FIELD_PREFS_CODE: &str = "prefs_code";

// File system context
pub const FIELD_DB_PATH: &str = "db_path";
pub const FIELD_BACKUP_PATH: &str = "backup_path";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

/// Code attached to warn events when a stored list field fails to decode.
/// Never surfaced as an error value.
pub const CODE_DECODE_DEGRADED: &str = "ERR_DECODE_DEGRADED";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!FIELD_WORKOUTSET_CODE.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_END.is_empty());
        assert!(!EVENT_END_ERROR.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_decode_code_follows_err_prefix() {
        assert!(CODE_DECODE_DEGRADED.starts_with("ERR_"));
    }
}
