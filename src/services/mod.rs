//! Runtime configuration and the user settings file.

pub mod config;
pub mod settings;

pub use config::{InputConfig, ListConfig, NavConfig};
pub use settings::{KeybindingRule, Settings, SettingsError};
