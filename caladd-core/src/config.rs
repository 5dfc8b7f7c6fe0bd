//! Process-wide configuration, read once at startup.
//!
//! Lives at ~/.config/caladd/config.toml. The `CALDAV_*` environment
//! variables override the `[caldav]` table so the tool can run from
//! environment alone.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_CALENDAR, DEFAULT_CALENDAR_HOME};
use crate::error::{CaladdError, CaladdResult};
use crate::settings::UserSettings;

/// Environment variable -> config key
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("CALDAV_URL", "caldav.url"),
    ("CALDAV_USERNAME", "caldav.username"),
    ("CALDAV_PASSWORD", "caldav.password"),
    ("CALDAV_CALENDAR_OWNER", "caldav.calendar_owner"),
];

fn default_calendar_home() -> String {
    DEFAULT_CALENDAR_HOME.to_string()
}

fn default_calendar() -> String {
    DEFAULT_CALENDAR.to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub caldav: Option<CaldavConfig>,

    /// Settings handed to every user.
    #[serde(default)]
    pub defaults: UserSettings,
}

/// Server credentials and the calendar events are written to.
#[derive(Debug, Clone, Deserialize)]
pub struct CaldavConfig {
    pub url: String,
    pub username: String,
    pub password: String,

    /// Whose calendar to write to; defaults to `username`.
    pub calendar_owner: Option<String>,

    #[serde(default = "default_calendar_home")]
    pub calendar_home: String,

    #[serde(default = "default_calendar")]
    pub calendar: String,
}

impl CaldavConfig {
    pub fn owner(&self) -> &str {
        self.calendar_owner.as_deref().unwrap_or(&self.username)
    }

    /// Collection path such as `/dav.php/calendars/alice/personal/`.
    pub fn calendar_path(&self) -> String {
        format!(
            "{}/{}/{}/",
            self.calendar_home.trim_end_matches('/'),
            self.owner(),
            self.calendar.trim_matches('/')
        )
    }
}

impl AppConfig {
    pub fn config_path() -> CaladdResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CaladdError::Config("Could not determine config directory".into()))?
            .join("caladd");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default path with process environment overrides.
    pub fn load() -> CaladdResult<Self> {
        Self::load_from(&Self::config_path()?, |key| std::env::var(key).ok())
    }

    /// Load from `path` (may be missing), letting `env` override CalDAV settings.
    pub fn load_from<F>(path: &Path, env: F) -> CaladdResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Config::builder().add_source(File::from(path.to_path_buf()).required(false));

        for (var, key) in ENV_OVERRIDES {
            builder = builder
                .set_override_option(*key, env(*var))
                .map_err(|e| CaladdError::Config(e.to_string()))?;
        }

        builder
            .build()
            .map_err(|e| CaladdError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CaladdError::Config(e.to_string()))
    }

    /// The CalDAV section, which submitting events requires.
    pub fn caldav(&self) -> CaladdResult<&CaldavConfig> {
        self.caldav.as_ref().ok_or_else(|| {
            CaladdError::Config(
                "No CalDAV server configured.\n\n\
                Set CALDAV_URL, CALDAV_USERNAME and CALDAV_PASSWORD, or add to config.toml:\n\n\
                [caldav]\n\
                url = \"https://dav.example.com\"\n\
                username = \"alice\"\n\
                password = \"secret\""
                    .into(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml"), no_env).unwrap();

        assert!(config.caldav.is_none());
        assert!(config.caldav().is_err());
        assert_eq!(config.defaults, UserSettings::default());
    }

    #[test]
    fn reads_file() {
        let (_dir, path) = write_config(
            r#"
[caldav]
url = "https://dav.example.com"
username = "alice"
password = "hunter2"

[defaults]
default_offset = "+15m"
timezone_offset = "+01:00"
"#,
        );
        let config = AppConfig::load_from(&path, no_env).unwrap();

        let caldav = config.caldav().unwrap();
        assert_eq!(caldav.url, "https://dav.example.com");
        assert_eq!(caldav.owner(), "alice");
        assert_eq!(caldav.calendar_path(), "/dav.php/calendars/alice/personal/");
        assert_eq!(config.defaults.default_offset, "+15m");
        assert_eq!(config.defaults.timezone_offset, "+01:00");
    }

    #[test]
    fn partial_defaults_fill_in() {
        let (_dir, path) = write_config("[defaults]\ndefault_offset = \"+30m\"\n");
        let config = AppConfig::load_from(&path, no_env).unwrap();

        assert_eq!(config.defaults.default_offset, "+30m");
        assert_eq!(config.defaults.timezone_offset, "-04:00");
    }

    #[test]
    fn environment_overrides_file() {
        let (_dir, path) = write_config(
            r#"
[caldav]
url = "https://file.example.com"
username = "alice"
password = "from-file"
calendar_home = "/remote.php/dav/calendars/"
calendar = "work"
"#,
        );
        let env: HashMap<&str, &str> = HashMap::from([
            ("CALDAV_PASSWORD", "from-env"),
            ("CALDAV_CALENDAR_OWNER", "team"),
        ]);
        let config =
            AppConfig::load_from(&path, |key| env.get(key).map(|v| v.to_string())).unwrap();

        let caldav = config.caldav().unwrap();
        assert_eq!(caldav.url, "https://file.example.com");
        assert_eq!(caldav.password, "from-env");
        assert_eq!(caldav.calendar_path(), "/remote.php/dav/calendars/team/work/");
    }

    #[test]
    fn environment_alone_is_enough() {
        let dir = tempfile::tempdir().unwrap();
        let env: HashMap<&str, &str> = HashMap::from([
            ("CALDAV_URL", "https://dav.example.com"),
            ("CALDAV_USERNAME", "bob"),
            ("CALDAV_PASSWORD", "pw"),
        ]);
        let config = AppConfig::load_from(&dir.path().join("config.toml"), |key| {
            env.get(key).map(|v| v.to_string())
        })
        .unwrap();

        assert_eq!(config.caldav().unwrap().calendar_path(), "/dav.php/calendars/bob/personal/");
    }

    #[test]
    fn incomplete_caldav_section_is_an_error() {
        let (_dir, path) = write_config("[caldav]\nurl = \"https://dav.example.com\"\n");
        assert!(matches!(
            AppConfig::load_from(&path, no_env),
            Err(CaladdError::Config(_))
        ));
    }
}
