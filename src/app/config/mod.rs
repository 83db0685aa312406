// SPDX-License-Identifier: MPL-2.0
//! User preferences, loaded from and saved to a `settings.toml` file.
//!
//! Preferences are the machine-local knobs (theme mode, remembered slides
//! directory, throttle bypass policy). Everything that describes the
//! presentation itself (rotations, slide details, transition, timers,
//! theme palette) lives in the JSON document store instead, so a
//! presentation can travel between machines as a directory of documents.
//!
//! The config file location can be customized for testing or portable
//! deployments: use `load_from_path()`/`save_to_path()` with an explicit
//! path, set `ICED_SLIDES_CONFIG_DIR`, or fall back to the platform config
//! directory.

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application chrome theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Slideshow behavior settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SlideshowConfig {
    /// Last used slides directory, reused when none is given on the CLI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slides_dir: Option<String>,

    /// Widens the navigation throttle bypass from the literal "None"
    /// transition style to any instant style.
    #[serde(default)]
    pub bypass_throttle_for_instant: bool,
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub slideshow: SlideshowConfig,
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path, falling back to defaults
/// (with a log line) when the file is missing or malformed.
pub fn load() -> Config {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> Config {
    let Some(path) = config_path_with_override(base_dir) else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    match load_from_path(&path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring malformed config {}: {}", path.display(), err);
            Config::default()
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
