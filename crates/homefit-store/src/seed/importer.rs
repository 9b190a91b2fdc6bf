//! Seed importer

use crate::errors::{from_rusqlite, Result};
use crate::repo::{ExerciseStore, UserPrefsStore, WorkoutSetStore};
use crate::seed::format_v0::SeedV0;
use crate::seed::parser::{parse_seed_file, parse_seed_str};
use rusqlite::Connection;
use std::path::Path;

/// What an import created
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Codes of the created sets, in seed order
    pub workoutset_codes: Vec<String>,
    pub exercise_count: usize,
    pub preferences_saved: bool,
}

/// Parse, validate and import a seed file
///
/// Everything is written in one transaction: on any failure nothing from
/// the seed remains.
///
/// # Errors
/// `InvalidInput` for invalid seeds, engine failures otherwise.
pub fn import_seed(path: &Path, conn: &mut Connection) -> Result<SeedReport> {
    let seed = parse_seed_file(path)?;
    import_parsed(&seed, conn)
}

/// [`import_seed`] for seed text held in memory
///
/// # Errors
/// As [`import_seed`].
pub fn import_seed_str(content: &str, conn: &mut Connection) -> Result<SeedReport> {
    let seed = parse_seed_str(content)?;
    import_parsed(&seed, conn)
}

fn import_parsed(seed: &SeedV0, conn: &mut Connection) -> Result<SeedReport> {
    let tx = conn.transaction().map_err(from_rusqlite)?;
    let mut report = SeedReport::default();

    for seed_set in &seed.workout_sets {
        let set_code = WorkoutSetStore::create(&tx, &seed_set.fields())?;
        for seed_exercise in &seed_set.exercises {
            ExerciseStore::create(&tx, &set_code, &seed_exercise.fields())?;
            report.exercise_count += 1;
        }
        report.workoutset_codes.push(set_code);
    }

    if let Some(prefs) = &seed.preferences {
        UserPrefsStore::save_current(&tx, prefs)?;
        report.preferences_saved = true;
    }

    tx.commit().map_err(from_rusqlite)?;

    tracing::debug!(
        workout_sets = report.workoutset_codes.len(),
        exercises = report.exercise_count,
        "seed imported"
    );
    Ok(report)
}
