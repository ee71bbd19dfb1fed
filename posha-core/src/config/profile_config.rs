use serde::{Deserialize, Serialize};

use super::defaults;

/// Values a fresh profile starts with before the user changes anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Preference tags enabled for a new user.
    pub default_preferences: Vec<String>,
    /// Skin tone assumed until the user picks one.
    pub default_skin_tone: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            default_preferences: defaults::DEFAULT_PREFERENCES
                .iter()
                .map(|p| p.to_string())
                .collect(),
            default_skin_tone: defaults::DEFAULT_SKIN_TONE.to_string(),
        }
    }
}
