//! Seed Format v0 schema

use homefit_core::model::exercise::{
    DEFAULT_REPEAT_COUNT, DEFAULT_REST_SECONDS, DEFAULT_ROUND_COUNT,
};
use homefit_core::model::{ExerciseFields, PrefsFields, WorkoutSetFields};
use serde::{Deserialize, Serialize};

/// Top-level seed file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedV0 {
    /// Must be 0
    pub schema_version: u32,

    #[serde(default)]
    pub workout_sets: Vec<SeedWorkoutSet>,

    /// Saved as the current preferences when present
    #[serde(default)]
    pub preferences: Option<PrefsFields>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedWorkoutSet {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Created in listed order
    #[serde(default)]
    pub exercises: Vec<SeedExercise>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedExercise {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub video_url: Option<String>,

    #[serde(default = "default_repeat_count")]
    pub repeat_count: u32,

    #[serde(default = "default_round_count")]
    pub round_count: u32,

    #[serde(default = "default_rest_seconds")]
    pub rest_seconds: u32,
}

fn default_repeat_count() -> u32 {
    DEFAULT_REPEAT_COUNT
}

fn default_round_count() -> u32 {
    DEFAULT_ROUND_COUNT
}

fn default_rest_seconds() -> u32 {
    DEFAULT_REST_SECONDS
}

impl SeedWorkoutSet {
    pub fn fields(&self) -> WorkoutSetFields {
        WorkoutSetFields {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

impl SeedExercise {
    pub fn fields(&self) -> ExerciseFields {
        ExerciseFields {
            name: self.name.clone(),
            description: self.description.clone(),
            images: self.images.clone(),
            video_url: self.video_url.clone(),
            repeat_count: self.repeat_count,
            round_count: self.round_count,
            rest_seconds: self.rest_seconds,
        }
    }
}
