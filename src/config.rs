//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/avlkit/avlkit.toml`
//! 3. Environment variables: `AVLKIT_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("config error: {message}")]
    Config { message: String },

    #[error("cannot read config file {path}: {message}")]
    Unreadable { path: PathBuf, message: String },
}

/// Raw settings for intermediate parsing (fields are Option to detect
/// "not specified", so unset file entries inherit the layer below).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub snapshot_path: Option<PathBuf>,
}

/// Unified configuration for avlkit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Snapshot file offered by the session's save/load prompts
    /// (default: ~/.avlkit/tree.avl)
    pub snapshot_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        let snapshot_path = BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(".avlkit").join("tree.avl"))
            .unwrap_or_else(|| PathBuf::from("tree.avl"));
        Self { snapshot_path }
    }
}

/// Get the XDG config directory for avlkit.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "avlkit").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("avlkit.toml"))
}

fn load_raw_settings(path: &Path) -> Result<RawSettings, ConfigLoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Unreadable {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    toml::from_str(&content).map_err(|e| ConfigLoadError::Unreadable {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value, otherwise keep self.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            snapshot_path: overlay
                .snapshot_path
                .clone()
                .unwrap_or_else(|| self.snapshot_path.clone()),
        }
    }

    /// Load settings with layered precedence.
    pub fn load() -> Result<Self, ConfigLoadError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        Ok(current)
    }

    /// Apply AVLKIT_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ConfigLoadError> {
        let builder =
            Config::builder().add_source(Environment::with_prefix("AVLKIT").separator("__"));
        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("snapshot_path") {
            settings.snapshot_path = PathBuf::from(val);
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigLoadError> {
        toml::to_string_pretty(self).map_err(|e| ConfigLoadError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ConfigLoadError {
    ConfigLoadError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load().expect("load defaults");
        assert!(settings
            .snapshot_path
            .to_string_lossy()
            .ends_with("tree.avl"));
    }

    #[test]
    fn given_overlay_with_path_when_merging_then_overlay_wins() {
        let base = Settings::default();
        let overlay = RawSettings {
            snapshot_path: Some(PathBuf::from("/tmp/other.avl")),
        };
        let merged = base.merge_with(&overlay);
        assert_eq!(merged.snapshot_path, PathBuf::from("/tmp/other.avl"));
    }

    #[test]
    fn given_empty_overlay_when_merging_then_base_is_kept() {
        let base = Settings::default();
        let merged = base.merge_with(&RawSettings::default());
        assert_eq!(merged, base);
    }

    #[test]
    fn effective_config_serializes_to_toml() {
        let toml = Settings::default().to_toml().expect("serialize");
        assert!(toml.contains("snapshot_path"));
    }
}
