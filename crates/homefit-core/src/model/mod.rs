pub mod exercise;
pub mod user_prefs;
pub mod workout_log;
pub mod workout_set;

pub use exercise::{Exercise, ExerciseFields};
pub use user_prefs::{PrefsFields, UserPrefs};
pub use workout_log::{LogEntry, LogFilter, NewWorkoutLog, WorkoutLog};
pub use workout_set::{WorkoutSet, WorkoutSetFields};
