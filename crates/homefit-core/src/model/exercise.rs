use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default repetitions for a new exercise
pub const DEFAULT_REPEAT_COUNT: u32 = 10;
/// Default rounds for a new exercise
pub const DEFAULT_ROUND_COUNT: u32 = 3;
/// Default rest between rounds, in seconds
pub const DEFAULT_REST_SECONDS: u32 = 60;

/// Exercise - one movement inside a workout set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub code: String,

    /// Owning workout set (cascade delete)
    pub workoutset_code: String,

    pub name: String,

    pub description: Option<String>,

    /// Relative image paths in upload order. Duplicates are kept.
    pub images: Vec<String>,

    pub video_url: Option<String>,

    pub repeat_count: u32,

    /// At least 1
    pub round_count: u32,

    pub rest_seconds: u32,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Mutable fields of an exercise, used for both create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseFields {
    pub name: String,
    pub description: Option<String>,
    pub images: Vec<String>,
    pub video_url: Option<String>,
    pub repeat_count: u32,
    pub round_count: u32,
    pub rest_seconds: u32,
}

impl ExerciseFields {
    /// Fields with the given name and the stock repeat/round/rest defaults
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            images: Vec::new(),
            video_url: None,
            repeat_count: DEFAULT_REPEAT_COUNT,
            round_count: DEFAULT_ROUND_COUNT,
            rest_seconds: DEFAULT_REST_SECONDS,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_video_url(mut self, url: impl Into<String>) -> Self {
        self.video_url = Some(url.into());
        self
    }

    pub fn with_counts(mut self, repeat_count: u32, round_count: u32, rest_seconds: u32) -> Self {
        self.repeat_count = repeat_count;
        self.round_count = round_count;
        self.rest_seconds = rest_seconds;
        self
    }
}

impl Exercise {
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

/// Apply an edit to an image list
///
/// Every path listed in `removed` is dropped (all occurrences), then
/// `appended` is added at the end in the given order. Relative order of the
/// surviving images is preserved.
pub fn revise_images(current: &[String], removed: &[String], appended: &[String]) -> Vec<String> {
    current
        .iter()
        .filter(|img| !removed.contains(img))
        .chain(appended.iter())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_uses_stock_defaults() {
        let fields = ExerciseFields::new("Squat");
        assert_eq!(fields.repeat_count, 10);
        assert_eq!(fields.round_count, 3);
        assert_eq!(fields.rest_seconds, 60);
        assert!(fields.images.is_empty());
    }

    #[test]
    fn test_revise_images_keeps_order() {
        let current = strings(&["a.png", "b.png", "c.png"]);
        let revised = revise_images(&current, &strings(&["b.png"]), &strings(&["d.png"]));
        assert_eq!(revised, strings(&["a.png", "c.png", "d.png"]));
    }

    #[test]
    fn test_revise_images_removes_every_duplicate() {
        let current = strings(&["a.png", "a.png", "b.png"]);
        let revised = revise_images(&current, &strings(&["a.png"]), &[]);
        assert_eq!(revised, strings(&["b.png"]));
    }

    #[test]
    fn test_revise_images_allows_duplicate_append() {
        let current = strings(&["a.png"]);
        let revised = revise_images(&current, &[], &strings(&["a.png"]));
        assert_eq!(revised, strings(&["a.png", "a.png"]));
    }
}
