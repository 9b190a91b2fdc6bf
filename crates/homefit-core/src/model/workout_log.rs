use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// WorkoutLog - one completed workout
///
/// Immutable once created. `completed_exercises` is a snapshot taken at
/// completion time and is never re-validated against live exercises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLog {
    pub code: String,

    /// Referenced by value; the set may no longer exist
    pub workoutset_code: String,

    pub date: DateTime<Utc>,

    /// Always > 0
    pub duration_seconds: u32,

    /// Exercise codes in completion order
    pub completed_exercises: Vec<String>,
}

/// Input for recording a finished workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWorkoutLog {
    pub workoutset_code: String,
    pub duration_seconds: u32,
    /// Defaults to the time of recording
    pub date: Option<DateTime<Utc>>,
    pub completed_exercises: Vec<String>,
}

impl NewWorkoutLog {
    pub fn new(workoutset_code: impl Into<String>, duration_seconds: u32) -> Self {
        Self {
            workoutset_code: workoutset_code.into(),
            duration_seconds,
            date: None,
            completed_exercises: Vec::new(),
        }
    }

    pub fn at(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_completed<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.completed_exercises = codes.into_iter().map(Into::into).collect();
        self
    }
}

/// A log row joined with the name of its set, for history listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub log: WorkoutLog,
    /// `None` once the set has been deleted
    pub workoutset_name: Option<String>,
}

/// Optional restrictions for listing logs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub workoutset_code: Option<String>,
    /// Only logs dated at or after this instant
    pub since: Option<DateTime<Utc>>,
}

impl LogFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_set(mut self, workoutset_code: impl Into<String>) -> Self {
        self.workoutset_code = Some(workoutset_code.into());
        self
    }

    pub fn since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }
}
