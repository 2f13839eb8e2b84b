// SPDX-License-Identifier: MPL-2.0
//! User preferences, loaded from and saved to a `settings.toml` file.
//!
//! Preferences are user-facing choices (theme, export scale, default design).
//! Transient state such as the last export directory lives in the CBOR app
//! state instead (see `app::persisted_state`).

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Scale factor applied when rasterizing a ticket for export.
pub const DEFAULT_EXPORT_SCALE: f32 = 3.0;
pub const MIN_EXPORT_SCALE: f32 = 1.0;
pub const MAX_EXPORT_SCALE: f32 = 8.0;

/// Window theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Resolves the effective dark/light choice, asking the OS for `System`.
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default)]
    pub export_scale: Option<f32>,
    /// Design selected by default when the designer opens.
    #[serde(default)]
    pub default_design: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::System,
            export_scale: Some(DEFAULT_EXPORT_SCALE),
            default_design: None,
        }
    }
}

impl Config {
    /// Export scale with out-of-range persisted values clamped back in.
    pub fn effective_export_scale(&self) -> f32 {
        self.export_scale
            .unwrap_or(DEFAULT_EXPORT_SCALE)
            .clamp(MIN_EXPORT_SCALE, MAX_EXPORT_SCALE)
    }
}

fn default_config_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = default_config_path() {
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            theme_mode: ThemeMode::Dark,
            export_scale: Some(2.0),
            default_design: Some("vibrant".to_string()),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.export_scale, Some(2.0));
        assert_eq!(loaded.default_design, config.default_design);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.theme_mode, ThemeMode::System);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn effective_export_scale_clamps_persisted_values() {
        let config = Config {
            export_scale: Some(50.0),
            ..Config::default()
        };
        assert_eq!(config.effective_export_scale(), MAX_EXPORT_SCALE);

        let config = Config {
            export_scale: None,
            ..Config::default()
        };
        assert_eq!(config.effective_export_scale(), DEFAULT_EXPORT_SCALE);
    }
}
