//! Game settings
//!
//! Loaded from a JSON file next to the binary, with leaderboard credentials
//! optionally supplied through the environment (or a `.env` file).

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::leaderboard::MAX_LEADERBOARD_ENTRIES;
use crate::tuning::Tuning;

/// Environment variable naming the settings file
pub const SETTINGS_PATH_ENV: &str = "VOID_PATROL_SETTINGS";
pub const DEFAULT_SETTINGS_PATH: &str = "void-patrol.json";

/// Leaderboard endpoint and credentials
pub const SUPABASE_URL_ENV: &str = "SUPABASE_URL";
pub const SUPABASE_KEY_ENV: &str = "SUPABASE_KEY";

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(err) => write!(f, "settings file error: {err}"),
            SettingsError::Parse(err) => write!(f, "settings parse error: {err}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(err) => Some(err),
            SettingsError::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardSettings {
    /// Project URL of the hosted store; offline board when absent
    pub url: Option<String>,
    /// Public (anon) API key
    pub api_key: Option<String>,
    pub table: String,
    /// Rows fetched and shown
    pub max_entries: usize,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for LeaderboardSettings {
    fn default() -> Self {
        Self {
            url: None,
            api_key: None,
            table: "leaderboard".to_string(),
            max_entries: MAX_LEADERBOARD_ENTRIES,
            timeout_ms: 5000,
        }
    }
}

impl LeaderboardSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// URL and key, when both are configured and non-blank
    pub fn remote(&self) -> Option<(&str, &str)> {
        let url = self.url.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let key = self.api_key.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        Some((url, key))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tuning: Tuning,
    pub leaderboard: LeaderboardSettings,
    /// Fixed run seed; a fresh one per launch when absent
    pub seed: Option<u64>,
}

impl Settings {
    /// Settings file location: `$VOID_PATROL_SETTINGS` or the default name
    pub fn default_path() -> PathBuf {
        std::env::var_os(SETTINGS_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH))
    }

    /// Strict read; missing keys take their defaults
    pub fn read(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Read `path`, falling back to defaults, then apply environment overrides
    pub fn load(path: &Path) -> Self {
        let mut settings = match Self::read(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                log::warn!("Ignoring {}: {err}", path.display());
                Self::default()
            }
        };
        settings.apply_overrides(
            std::env::var(SUPABASE_URL_ENV).ok(),
            std::env::var(SUPABASE_KEY_ENV).ok(),
        );
        settings
    }

    /// Leaderboard URL/key from outside the file take precedence
    pub fn apply_overrides(&mut self, url: Option<String>, api_key: Option<String>) {
        if let Some(url) = url {
            self.leaderboard.url = Some(url);
        }
        if let Some(api_key) = api_key {
            self.leaderboard.api_key = Some(api_key);
        }
    }

    /// Write as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
