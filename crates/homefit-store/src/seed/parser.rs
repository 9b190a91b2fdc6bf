//! Seed parser with validation

use crate::errors::{seed_validation, Result};
use crate::seed::format_v0::SeedV0;
use homefit_core::rules::validation::{
    validate_exercise_form, validate_prefs_form, validate_workout_set,
};
use std::fs;
use std::path::Path;

/// Parse and validate a seed file
///
/// # Errors
/// `InvalidInput` for unreadable files, YAML errors and rule violations.
pub fn parse_seed_file(path: &Path) -> Result<SeedV0> {
    let content = fs::read_to_string(path)
        .map_err(|e| seed_validation(&format!("Failed to read seed file: {}", e)))?;

    parse_seed_str(&content)
}

/// Parse and validate a seed from a string
///
/// # Errors
/// `InvalidInput` for YAML errors and rule violations.
pub fn parse_seed_str(content: &str) -> Result<SeedV0> {
    let seed: SeedV0 = serde_yaml::from_str(content)
        .map_err(|e| seed_validation(&format!("YAML parse error: {}", e)))?;

    validate_seed(&seed)?;

    Ok(seed)
}

fn validate_seed(seed: &SeedV0) -> Result<()> {
    if seed.schema_version != 0 {
        return Err(seed_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            seed.schema_version
        )));
    }

    for (i, set) in seed.workout_sets.iter().enumerate() {
        validate_workout_set(&set.fields())
            .map_err(|e| seed_validation(&format!("workout_sets[{}]: {}", i, e)))?;

        for (j, exercise) in set.exercises.iter().enumerate() {
            validate_exercise_form(&exercise.fields()).map_err(|e| {
                seed_validation(&format!("workout_sets[{}].exercises[{}]: {}", i, j, e))
            })?;
        }
    }

    if let Some(prefs) = &seed.preferences {
        validate_prefs_form(prefs)
            .map_err(|e| seed_validation(&format!("preferences: {}", e)))?;
    }

    Ok(())
}
