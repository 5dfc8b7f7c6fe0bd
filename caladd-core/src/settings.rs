//! Per-user settings lookup.

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_OFFSET, DEFAULT_TIMEZONE};

/// Settings that shape how one user's placeholders resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Offset expression used when the end time is `!`, e.g. `+1h`.
    /// Only validated when it is used.
    pub default_offset: String,
    /// Flat UTC offset such as `-04:00`.
    pub timezone_offset: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        UserSettings {
            default_offset: DEFAULT_OFFSET.to_string(),
            timezone_offset: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

impl UserSettings {
    pub fn timezone(&self) -> Result<FixedOffset, String> {
        parse_timezone_offset(&self.timezone_offset)
    }
}

/// Source of user settings, keyed by the invoker's identifier.
pub trait SettingsStore {
    fn user_settings(&self, user_id: &str) -> UserSettings;
}

/// Hands every user the same settings record.
#[derive(Debug, Clone, Default)]
pub struct StaticSettings {
    settings: UserSettings,
}

impl StaticSettings {
    pub fn new(settings: UserSettings) -> Self {
        StaticSettings { settings }
    }
}

impl SettingsStore for StaticSettings {
    fn user_settings(&self, _user_id: &str) -> UserSettings {
        self.settings.clone()
    }
}

/// Parse `±HH:MM` (or `Z`) into a fixed offset.
pub fn parse_timezone_offset(s: &str) -> Result<FixedOffset, String> {
    let invalid = || format!("Invalid timezone offset '{}'. Expected ±HH:MM", s);

    if s == "Z" {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    s.parse::<FixedOffset>().map_err(|_| invalid())
}
