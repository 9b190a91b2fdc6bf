// End-to-end flows through the engine: templates, history, stats, backups.

use chrono::{Duration, Utc};
use homefit_core::{
    ExErrorKind, ExerciseFields, LogFilter, NewWorkoutLog, PrefsFields, WorkoutSetFields,
};
use homefit_engine::{Database, StoreConfig};
use std::path::PathBuf;
use tempfile::TempDir;

fn fresh_db() -> (TempDir, Database) {
    let temp_dir = TempDir::new().unwrap();
    let db = Database::new(StoreConfig::from_root(temp_dir.path()));
    db.initialize(false).unwrap();
    (temp_dir, db)
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../homefit-store/tests/fixtures")
        .join(name)
}

fn set_with_exercises(db: &Database, n: usize) -> (String, Vec<String>) {
    let set = db
        .create_workout_set(&WorkoutSetFields::new("Full body"))
        .unwrap();
    let exercises = (0..n)
        .map(|i| {
            db.create_exercise(&set, &ExerciseFields::new(format!("Move {}", i)))
                .unwrap()
        })
        .collect();
    (set, exercises)
}

#[test]
fn test_template_round_trip() {
    let (_tmp, db) = fresh_db();
    let set = db
        .create_workout_set(&WorkoutSetFields::new("Core").with_description("Abs day"))
        .unwrap();
    let ex = db
        .create_exercise(
            &set,
            &ExerciseFields::new("Plank")
                .with_images(["plank.png"])
                .with_counts(1, 3, 30),
        )
        .unwrap();

    let stored = db.get_exercise(&ex).unwrap().unwrap();
    assert_eq!(stored.workoutset_code, set);
    assert_eq!(stored.images, vec!["plank.png".to_string()]);
    assert_eq!(stored.round_count, 3);

    assert!(db
        .update_workout_set(&set, &WorkoutSetFields::new("Core v2"))
        .unwrap());
    assert_eq!(db.get_workout_set(&set).unwrap().unwrap().name, "Core v2");
    assert_eq!(db.exercises_for_set(&set).unwrap().len(), 1);
}

#[test]
fn test_exercise_for_unknown_set_is_not_found() {
    let (_tmp, db) = fresh_db();
    let err = db
        .create_exercise("missing", &ExerciseFields::new("Push-up"))
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
}

#[test]
fn test_image_revision_keeps_order() {
    let (_tmp, db) = fresh_db();
    let (set, _) = set_with_exercises(&db, 0);
    let ex = db
        .create_exercise(&set, &ExerciseFields::new("Lunge").with_images(["a", "b", "c"]))
        .unwrap();

    db.revise_exercise_images(&ex, &["b".to_string()], &["d".to_string()])
        .unwrap();

    let images = db.get_exercise(&ex).unwrap().unwrap().images;
    assert_eq!(images, vec!["a", "c", "d"]);
}

#[test]
fn test_deleting_set_keeps_history() {
    let (_tmp, db) = fresh_db();
    let (set, _) = set_with_exercises(&db, 2);
    let log = db.record_workout(&NewWorkoutLog::new(&set, 600)).unwrap();

    assert!(db.delete_workout_set(&set).unwrap());

    assert!(db.list_exercises(Some(&set)).unwrap().is_empty());
    let history = db.workout_history(&LogFilter::all()).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].log.code, log);
    assert_eq!(history[0].workoutset_name, None);
}

#[test]
fn test_deleting_set_with_history_removes_logs() {
    let (_tmp, db) = fresh_db();
    let (set, _) = set_with_exercises(&db, 1);
    db.record_workout(&NewWorkoutLog::new(&set, 300)).unwrap();

    assert!(db.delete_workout_set_with_history(&set).unwrap());

    assert!(db.list_workout_logs(&LogFilter::all()).unwrap().is_empty());
}

#[test]
fn test_completion_and_days_since() {
    let (_tmp, db) = fresh_db();
    let (set, exercises) = set_with_exercises(&db, 3);

    assert_eq!(db.days_since_last_workout(&set).unwrap(), None);

    let done = vec![exercises[0].clone()];
    db.record_workout(
        &NewWorkoutLog::new(&set, 900)
            .at(Utc::now() - Duration::days(3))
            .with_completed(done.iter()),
    )
    .unwrap();

    assert_eq!(db.completion_percentage(&set, &done).unwrap(), 33);
    assert_eq!(db.days_since_last_workout(&set).unwrap(), Some(3));
    assert_eq!(
        db.last_workout_for_set(&set).unwrap().unwrap().completed_exercises,
        done
    );
}

#[test]
fn test_summary_counts_rounds_and_rest() {
    let (_tmp, db) = fresh_db();
    let set = db
        .create_workout_set(&WorkoutSetFields::new("Arms"))
        .unwrap();
    db.create_exercise(&set, &ExerciseFields::new("Curl").with_counts(10, 3, 60))
        .unwrap();
    db.create_exercise(&set, &ExerciseFields::new("Dip").with_counts(10, 2, 30))
        .unwrap();

    let summary = db.workout_set_summary(&set).unwrap();
    assert_eq!(summary.exercise_count, 2);
    assert_eq!(summary.total_rounds, 5);
}

#[test]
fn test_preferences_upsert_keeps_single_row() {
    let (_tmp, db) = fresh_db();
    let first = db.get_preferences().unwrap().unwrap();

    let mut fields = first.fields();
    fields.timer_sound = "gong".to_string();
    let code = db.save_preferences(&fields).unwrap();

    assert_eq!(code, first.code);
    let defaults = db.get_default_settings().unwrap();
    assert_eq!(defaults.timer_sound, "gong");
    assert_eq!(defaults.default_round_count, PrefsFields::default().default_round_count);
}

#[test]
fn test_clear_history_counts_rows() {
    let (_tmp, db) = fresh_db();
    let (set, _) = set_with_exercises(&db, 1);
    db.record_workout(&NewWorkoutLog::new(&set, 60)).unwrap();
    db.record_workout(&NewWorkoutLog::new(&set, 120)).unwrap();

    assert_eq!(db.clear_history().unwrap(), 2);
    assert_eq!(db.clear_history().unwrap(), 0);
}

#[test]
fn test_seed_then_backup_and_restore() {
    let (_tmp, db) = fresh_db();
    let report = db.import_seed(&fixture("demo_seed.yaml")).unwrap();
    assert_eq!(report.workoutset_codes.len(), 3);

    let backup = db.create_backup().unwrap();
    let listed = db.list_backups().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].path, backup);

    db.initialize(true).unwrap();
    assert!(db.list_workout_sets().unwrap().is_empty());

    let outcome = db.restore_from_named_backup(&listed[0].filename).unwrap();
    assert!(outcome.safety_copy.is_some());
    assert_eq!(db.list_workout_sets().unwrap().len(), 3);

    let info = db.database_info().unwrap();
    assert!(info.exists);
    assert_eq!(info.records_count.get("workout_sets"), Some(&3));

    assert!(db.delete_backup(&listed[0].filename).unwrap());
    assert!(db.list_backups().unwrap().is_empty());
}

#[test]
fn test_restore_rejects_non_database() {
    let (tmp, db) = fresh_db();
    db.create_workout_set(&WorkoutSetFields::new("Keep me"))
        .unwrap();
    let junk = tmp.path().join("junk.db");
    std::fs::write(&junk, "definitely not sqlite\n".repeat(200)).unwrap();

    let err = db.restore_from_backup(&junk).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotADatabase);
    assert_eq!(db.list_workout_sets().unwrap().len(), 1);
}
