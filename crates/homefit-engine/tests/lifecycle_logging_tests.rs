// Lifecycle logging and missing-database behavior of the engine handle.

use homefit_core::logging_facility::test_capture::init_test_capture;
use homefit_core::{ExErrorKind, WorkoutSetFields};
use homefit_engine::{Database, StoreConfig};
use tempfile::TempDir;

fn fresh_db() -> (TempDir, Database) {
    let temp_dir = TempDir::new().unwrap();
    let db = Database::new(StoreConfig::from_root(temp_dir.path()));
    db.initialize(false).unwrap();
    (temp_dir, db)
}

#[test]
fn test_operation_without_database_fails_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let db = Database::new(StoreConfig::from_root(temp_dir.path()));

    let err = db.list_workout_sets().unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.op(), Some("list_workout_sets"));
    assert!(
        !db.config().db_path.exists(),
        "a read must never create the database file"
    );
}

#[test]
fn test_successful_operation_emits_start_and_end() {
    let capture = init_test_capture();
    let (_tmp, db) = fresh_db();

    db.count_exercises("no-such-set").unwrap();

    capture.assert_event_exists("count_exercises", "start");
    capture.assert_event_exists("count_exercises", "end");
}

#[test]
fn test_failed_operation_emits_end_error_with_code() {
    let capture = init_test_capture();
    let (_tmp, db) = fresh_db();

    let err = db
        .create_workout_set(&WorkoutSetFields::new("   "))
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);

    let errors: Vec<_> = capture
        .events_for_op("create_workout_set")
        .into_iter()
        .filter(|e| e.event.as_deref() == Some("end_error"))
        .collect();
    assert!(!errors.is_empty(), "expected an end_error event");
    assert!(errors
        .iter()
        .any(|e| e.field("err_code") == Some("ERR_INVALID_INPUT")));
}

#[test]
fn test_initialize_reports_creation_once() {
    let temp_dir = TempDir::new().unwrap();
    let db = Database::new(StoreConfig::from_root(temp_dir.path()));

    assert!(db.initialize(false).unwrap());
    assert!(!db.initialize(false).unwrap());
    assert!(db.initialize(true).unwrap());
}

#[test]
fn test_force_initialize_wipes_data() {
    let (_tmp, db) = fresh_db();
    db.create_workout_set(&WorkoutSetFields::new("Legs")).unwrap();

    db.initialize(true).unwrap();

    assert!(db.list_workout_sets().unwrap().is_empty());
}

#[test]
fn test_migrate_on_fresh_database_adds_nothing() {
    let (_tmp, db) = fresh_db();
    assert!(db.migrate().unwrap().is_empty());
}
