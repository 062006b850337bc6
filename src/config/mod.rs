//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Preferences are intentionally lenient on load: a config file that fails to
//! parse falls back to defaults and surfaces a warning instead of refusing to
//! start, because the operator may be minutes away from a service.

mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedLectern";

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralSection,
    #[serde(default)]
    pub presentation: PresentationSection,
    #[serde(default)]
    pub live: LiveSection,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSection {
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct PresentationSection {
    /// Fade transition duration between slides, in milliseconds.
    #[serde(default)]
    pub transition_ms: Option<u64>,
    /// Whether hymns presented standalone get a leading "number / title"
    /// slide. Playlist activation always omits it.
    #[serde(default)]
    pub standalone_title_slide: Option<bool>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct LiveSection {
    /// Poll interval of the mirror's subscription, in milliseconds.
    #[serde(default)]
    pub poll_ms: Option<u64>,
    /// Override for the shared session document location.
    #[serde(default)]
    pub session_file: Option<PathBuf>,
}

impl Config {
    /// Effective transition duration, clamped into the supported range.
    pub fn transition_ms(&self) -> u64 {
        self.presentation
            .transition_ms
            .unwrap_or(DEFAULT_TRANSITION_MS)
            .clamp(MIN_TRANSITION_MS, MAX_TRANSITION_MS)
    }

    /// Effective mirror poll interval, clamped into the supported range.
    pub fn poll_ms(&self) -> u64 {
        self.live
            .poll_ms
            .unwrap_or(DEFAULT_LIVE_POLL_MS)
            .clamp(MIN_LIVE_POLL_MS, MAX_LIVE_POLL_MS)
    }
}

fn get_default_config_path(dir_override: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = dir_override {
        return Some(dir.join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration, falling back to defaults.
///
/// Returns the config together with an optional warning message describing
/// why defaults were used.
pub fn load(dir_override: Option<&Path>) -> (Config, Option<String>) {
    let Some(path) = get_default_config_path(dir_override) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => (config, None),
            Err(_) => (
                Config::default(),
                Some("Could not parse settings.toml; using defaults".to_string()),
            ),
        },
        Err(_) => (
            Config::default(),
            Some("Could not read settings.toml; using defaults".to_string()),
        ),
    }
}

pub fn save(config: &Config, dir_override: Option<&Path>) -> Result<()> {
    if let Some(path) = get_default_config_path(dir_override) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
