//! User settings stored as JSON under the platform cache directory.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::config::{InputConfig, ListConfig, NavConfig};

const SETTINGS_DIR: &str = ".padnav";
const SETTINGS_FILE: &str = "settings.json";
const LOG_DIR: &str = "logs";

/// One key remap: `key` uses the `ctrl+shift+x` notation, `direction` is a
/// navigation input name such as `confirm`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub direction: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub nav: NavConfig,
    pub list: ListConfig,
    pub input: InputConfig,
    pub keybindings: Vec<KeybindingRule>,
}

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "cannot read settings: {}", e),
            SettingsError::Parse(e) => write!(f, "invalid settings file: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

pub fn settings_path() -> Option<PathBuf> {
    app_dir().map(|dir| dir.join(SETTINGS_FILE))
}

pub fn log_dir() -> Option<PathBuf> {
    app_dir().map(|dir| dir.join(LOG_DIR))
}

/// Create the settings file with defaults if it does not exist yet.
pub fn ensure_settings_file() -> std::io::Result<PathBuf> {
    let path = settings_path().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine settings directory",
        )
    })?;
    write_default_if_missing(&path)?;
    Ok(path)
}

pub fn write_default_if_missing(path: &Path) -> std::io::Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(&Settings::default())?;
    std::fs::write(path, content)
}

pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Load the user settings, falling back to defaults when the file is missing
/// or unreadable.
pub fn load_or_default() -> Settings {
    let Some(path) = settings_path() else {
        return Settings::default();
    };
    match load_settings(&path) {
        Ok(settings) => settings,
        Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            Settings::default()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "using default settings");
            Settings::default()
        }
    }
}

fn app_dir() -> Option<PathBuf> {
    cache_root().map(|dir| dir.join(SETTINGS_DIR))
}

fn env_path(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Per-user cache root for the current platform.
fn cache_root() -> Option<PathBuf> {
    if cfg!(target_os = "macos") {
        env_path("HOME").map(|home| home.join("Library").join("Caches"))
    } else if cfg!(target_os = "windows") {
        env_path("LOCALAPPDATA").or_else(|| env_path("APPDATA"))
    } else if cfg!(unix) {
        env_path("XDG_CACHE_HOME").or_else(|| env_path("HOME").map(|home| home.join(".cache")))
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/settings.rs"]
mod tests;
