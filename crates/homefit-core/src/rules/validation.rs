use crate::errors::{HomefitError, Result};
use crate::model::{ExerciseFields, NewWorkoutLog, PrefsFields, WorkoutSetFields};

/// Inclusive bounds for a numeric form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRange {
    pub field: &'static str,
    pub min: i64,
    pub max: i64,
}

impl FieldRange {
    pub const fn new(field: &'static str, min: i64, max: i64) -> Self {
        Self { field, min, max }
    }

    /// # Errors
    /// `OutOfRange` when `value` falls outside `[min, max]`.
    pub fn check(&self, value: i64) -> Result<()> {
        if value < self.min || value > self.max {
            return Err(HomefitError::OutOfRange {
                field: self.field.to_string(),
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    pub fn contains(&self, value: i64) -> bool {
        self.check(value).is_ok()
    }
}

// Form ranges. Adapters apply these before calling a store; the stores only
// enforce the data-model invariants below.
pub const ROUND_COUNT_RANGE: FieldRange = FieldRange::new("round_count", 1, 99);
pub const REPEAT_COUNT_RANGE: FieldRange = FieldRange::new("repeat_count", 1, 999);
pub const REST_SECONDS_RANGE: FieldRange = FieldRange::new("rest_seconds", 0, 9999);

/// # Errors
/// `InvalidName` when the name is empty or whitespace only.
pub fn validate_name(entity: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(HomefitError::InvalidName {
            entity: entity.to_string(),
            reason: "name must not be empty".to_string(),
        });
    }
    Ok(())
}

/// # Errors
/// `InvalidName` for a blank set name.
pub fn validate_workout_set(fields: &WorkoutSetFields) -> Result<()> {
    validate_name("workout set", &fields.name)
}

/// Data-model checks for an exercise: non-empty name and at least one round
///
/// # Errors
/// `InvalidName` or `OutOfRange`.
pub fn validate_exercise(fields: &ExerciseFields) -> Result<()> {
    validate_name("exercise", &fields.name)?;
    if fields.round_count < 1 {
        return Err(HomefitError::OutOfRange {
            field: "round_count".to_string(),
            value: i64::from(fields.round_count),
            min: 1,
            max: i64::from(u32::MAX),
        });
    }
    Ok(())
}

/// Full form validation for an exercise edit
///
/// # Errors
/// The first violated rule.
pub fn validate_exercise_form(fields: &ExerciseFields) -> Result<()> {
    validate_name("exercise", &fields.name)?;
    REPEAT_COUNT_RANGE.check(i64::from(fields.repeat_count))?;
    ROUND_COUNT_RANGE.check(i64::from(fields.round_count))?;
    REST_SECONDS_RANGE.check(i64::from(fields.rest_seconds))?;
    Ok(())
}

/// Form validation for the preference defaults
///
/// # Errors
/// The first violated rule.
pub fn validate_prefs_form(fields: &PrefsFields) -> Result<()> {
    REPEAT_COUNT_RANGE.check(i64::from(fields.default_repeat_count))?;
    ROUND_COUNT_RANGE.check(i64::from(fields.default_round_count))?;
    REST_SECONDS_RANGE.check(i64::from(fields.default_rest_seconds))?;
    REST_SECONDS_RANGE.check(i64::from(fields.default_warmup_rest_seconds))?;
    Ok(())
}

/// # Errors
/// `InvalidDuration` for a zero-length workout.
pub fn validate_workout_log(log: &NewWorkoutLog) -> Result<()> {
    if log.duration_seconds == 0 {
        return Err(HomefitError::InvalidDuration { seconds: 0 });
    }
    Ok(())
}
