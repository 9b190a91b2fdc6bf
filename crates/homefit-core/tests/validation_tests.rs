#![allow(clippy::unwrap_used, clippy::expect_used)]

use homefit_core::errors::{ExError, ExErrorKind, HomefitError};
use homefit_core::model::{ExerciseFields, NewWorkoutLog, PrefsFields};
use homefit_core::rules::validation::{
    validate_exercise, validate_exercise_form, validate_prefs_form, validate_workout_log,
    REPEAT_COUNT_RANGE, REST_SECONDS_RANGE, ROUND_COUNT_RANGE,
};

#[test]
fn test_stock_defaults_pass_form_rules() {
    assert!(validate_exercise_form(&ExerciseFields::new("Lunge")).is_ok());
    assert!(validate_prefs_form(&PrefsFields::default()).is_ok());
}

#[test]
fn test_form_rules_report_field_and_bounds() {
    let fields = ExerciseFields::new("Lunge").with_counts(10, 3, 10_000);
    let err = validate_exercise_form(&fields).unwrap_err();
    assert_eq!(
        err,
        HomefitError::OutOfRange {
            field: "rest_seconds".to_string(),
            value: 10_000,
            min: 0,
            max: 9999,
        }
    );
}

#[test]
fn test_form_rejects_zero_repeats_model_does_not() {
    let fields = ExerciseFields::new("Hold").with_counts(0, 1, 0);
    assert!(validate_exercise(&fields).is_ok());
    assert!(validate_exercise_form(&fields).is_err());
}

#[test]
fn test_range_constants() {
    assert_eq!((ROUND_COUNT_RANGE.min, ROUND_COUNT_RANGE.max), (1, 99));
    assert_eq!((REPEAT_COUNT_RANGE.min, REPEAT_COUNT_RANGE.max), (1, 999));
    assert_eq!((REST_SECONDS_RANGE.min, REST_SECONDS_RANGE.max), (0, 9999));
}

#[test]
fn test_validation_errors_surface_as_invalid_input() {
    let err: ExError = validate_workout_log(&NewWorkoutLog::new("ws", 0))
        .unwrap_err()
        .into();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);

    let err: ExError = validate_exercise(&ExerciseFields::new(""))
        .unwrap_err()
        .into();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
}
