// src/config/config_load.rs
//
// loading of config.toml

use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::config_types::{AnimationConfig, LayoutConfig, WindowConfig};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub animation: AnimationConfig,
    pub layout: LayoutConfig,
}

impl Config {
    /// Loads `config.toml` from the executable's directory, then from the
    /// working directory. Falls back to defaults when neither exists.
    pub fn load() -> Result<Self, ConfigError> {
        // First try to load from the executable's directory
        if let Some(path) = Self::exe_dir_config_path() {
            if path.exists() {
                return Self::load_from_path(&path);
            }
        }

        // Fallback to loading from the current working directory
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            return Self::load_from_path(path);
        }

        info!("No {} found, using default configuration", CONFIG_FILE);
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid(String::from(
                "animation.frame_interval_ms must be greater than zero",
            )));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size {}x{} has a zero dimension",
                self.window.width, self.window.height
            )));
        }
        Ok(())
    }

    fn exe_dir_config_path() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        Some(exe_dir.join(CONFIG_FILE))
    }
}
