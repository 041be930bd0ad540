//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Session length
//! - Completion notification behavior
//!
//! Configuration is stored at `<data_dir>/config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::ConfigError;

/// Session-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session length in minutes.
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
}

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Ring the terminal bell when a session completes.
    #[serde(default = "default_true")]
    pub bell: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

fn default_focus_minutes() -> u32 {
    25
}
fn default_true() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bell: true,
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|err| ConfigError::DataDir(err.to_string()))?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing the defaults on first run.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|err| ConfigError::LoadFailed {
                path,
                message: err.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|err| ConfigError::SaveFailed {
            path: path.clone(),
            message: err.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|err| ConfigError::SaveFailed {
            path,
            message: err.to_string(),
        })
    }

    /// Session length in seconds, never zero.
    pub fn total_seconds(&self) -> u32 {
        self.session.focus_minutes.saturating_mul(60).max(1)
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "session.focus_minutes" => Some(self.session.focus_minutes.to_string()),
            "notifications.enabled" => Some(self.notifications.enabled.to_string()),
            "notifications.bell" => Some(self.notifications.bell.to_string()),
            _ => None,
        }
    }

    /// All known keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "session.focus_minutes",
                self.session.focus_minutes.to_string(),
            ),
            ("notifications.enabled", self.notifications.enabled.to_string()),
            ("notifications.bell", self.notifications.bell.to_string()),
        ]
    }

    /// Update a value by key without persisting.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "session.focus_minutes" => {
                let minutes: u32 = value.parse().map_err(|_| invalid(key, value))?;
                if minutes == 0 {
                    return Err(invalid(key, value));
                }
                self.session.focus_minutes = minutes;
            }
            "notifications.enabled" => {
                self.notifications.enabled = value.parse().map_err(|_| invalid(key, value))?;
            }
            "notifications.bell" => {
                self.notifications.bell = value.parse().map_err(|_| invalid(key, value))?;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Update a value by key and persist the result.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.set_value(key, value)?;
        self.save()
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("cannot parse '{value}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.session.focus_minutes, 25);
        assert!(parsed.notifications.enabled);
        assert!(parsed.notifications.bell);
    }

    #[test]
    fn empty_toml_uses_section_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.session.focus_minutes, 25);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let parsed: Config = toml::from_str("[session]\nfocus_minutes = 50\n").unwrap();
        assert_eq!(parsed.session.focus_minutes, 50);
        assert!(parsed.notifications.bell);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("session.focus_minutes").as_deref(), Some("25"));
        assert_eq!(cfg.get("notifications.bell").as_deref(), Some("true"));
        assert!(cfg.get("session.missing_key").is_none());
    }

    #[test]
    fn set_value_updates_known_keys() {
        let mut cfg = Config::default();
        cfg.set_value("session.focus_minutes", "50").unwrap();
        cfg.set_value("notifications.bell", "false").unwrap();
        assert_eq!(cfg.session.focus_minutes, 50);
        assert!(!cfg.notifications.bell);
    }

    #[test]
    fn set_value_rejects_unknown_key() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set_value("session.nonexistent", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn set_value_rejects_bad_values() {
        let mut cfg = Config::default();
        assert!(cfg.set_value("session.focus_minutes", "zero").is_err());
        assert!(cfg.set_value("session.focus_minutes", "0").is_err());
        assert!(cfg.set_value("notifications.enabled", "sometimes").is_err());
    }

    #[test]
    fn total_seconds_follows_the_configured_length() {
        let mut cfg = Config::default();
        assert_eq!(cfg.total_seconds(), 1500);
        cfg.session.focus_minutes = 1;
        assert_eq!(cfg.total_seconds(), 60);
    }

    #[test]
    fn entries_cover_every_gettable_key() {
        let cfg = Config::default();
        for (key, value) in cfg.entries() {
            assert_eq!(cfg.get(key).as_deref(), Some(value.as_str()));
        }
    }
}
