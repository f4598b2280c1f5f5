// src/infrastructure/config.rs
use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_PREVIEW_LINES, NOTES_KEY};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct StorageConfig {
    /// Directory holding the slot files; empty means the platform data dir
    #[serde(default)]
    pub data_dir: String,
    #[serde(default = "default_key")]
    pub key: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_preview_lines")]
    pub preview_lines: usize,
}

fn default_key() -> String { NOTES_KEY.to_string() }
fn default_preview_lines() -> usize { DEFAULT_PREVIEW_LINES }

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: String::new(),
            key: default_key(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            preview_lines: default_preview_lines(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config {}", path.display()))?;

        Ok(config)
    }

    /// Load `path`, or defaults when it does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            debug!(?path, "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Platform location of the config file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Directory for slot files: `override_dir`, then config, then platform data dir
    pub fn resolve_data_dir(&self, override_dir: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = override_dir {
            return Ok(dir.to_path_buf());
        }
        if !self.storage.data_dir.is_empty() {
            return Ok(PathBuf::from(&self.storage.data_dir));
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .context("Could not determine data directory")
    }
}
