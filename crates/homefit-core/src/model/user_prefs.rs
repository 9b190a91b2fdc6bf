use serde::{Deserialize, Serialize};

/// UserPrefs - the user's default workout settings
///
/// Readers expect at most one logical row; the store's `upsert` keeps it
/// that way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPrefs {
    pub code: String,
    pub default_repeat_count: u32,
    pub default_round_count: u32,
    pub default_rest_seconds: u32,
    /// Rest before the first round
    pub default_warmup_rest_seconds: u32,
    pub timer_sound: String,
    pub notifications_enabled: bool,
}

/// Preference values without the row code
///
/// `Default` is the hardcoded tuple served when no row exists yet. Missing
/// keys deserialize to their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefsFields {
    pub default_repeat_count: u32,
    pub default_round_count: u32,
    pub default_rest_seconds: u32,
    pub default_warmup_rest_seconds: u32,
    pub timer_sound: String,
    pub notifications_enabled: bool,
}

impl Default for PrefsFields {
    fn default() -> Self {
        Self {
            default_repeat_count: 10,
            default_round_count: 3,
            default_rest_seconds: 60,
            default_warmup_rest_seconds: 120,
            timer_sound: "default".to_string(),
            notifications_enabled: true,
        }
    }
}

impl UserPrefs {
    pub fn fields(&self) -> PrefsFields {
        PrefsFields {
            default_repeat_count: self.default_repeat_count,
            default_round_count: self.default_round_count,
            default_rest_seconds: self.default_rest_seconds,
            default_warmup_rest_seconds: self.default_warmup_rest_seconds,
            timer_sound: self.timer_sound.clone(),
            notifications_enabled: self.notifications_enabled,
        }
    }
}
