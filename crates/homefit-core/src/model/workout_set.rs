use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// WorkoutSet - a named workout template
///
/// A set exclusively owns its exercises: deleting the set removes them.
/// Workout logs reference a set by code but are not owned by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    /// Opaque unique code, generated on creation and never reused
    pub code: String,

    /// Display name (required, non-empty)
    pub name: String,

    pub description: Option<String>,

    pub created_at: DateTime<Utc>,

    /// Advances on every update of the row
    pub updated_at: DateTime<Utc>,
}

/// Mutable fields of a workout set, used for both create and update
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkoutSetFields {
    pub name: String,
    pub description: Option<String>,
}

impl WorkoutSetFields {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl WorkoutSet {
    /// Current field values, e.g. to pre-fill an edit form
    pub fn fields(&self) -> WorkoutSetFields {
        WorkoutSetFields {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_builder() {
        let fields = WorkoutSetFields::new("Morning").with_description("Wake up");
        assert_eq!(fields.name, "Morning");
        assert_eq!(fields.description.as_deref(), Some("Wake up"));
    }

    #[test]
    fn test_fields_roundtrip_from_entity() {
        let now = Utc::now();
        let set = WorkoutSet {
            code: "ws-1".to_string(),
            name: "HIIT".to_string(),
            description: None,
            created_at: now,
            updated_at: now,
        };
        assert_eq!(set.fields(), WorkoutSetFields::new("HIIT"));
    }
}
