//! Configuration management for the application.
//!
//! Handles loading, validating, and saving application configuration in TOML
//! format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::APP_NAME;

/// Export-related settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory exported files are written to when no explicit output path
    /// is given.
    pub output_dir: PathBuf,
    /// Default export format ("json", "svg" or "react").
    pub default_format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        let output_dir = Config::config_dir()
            .map(|dir| dir.join("exports"))
            .unwrap_or_else(|_| PathBuf::from(".exports"));

        Self {
            output_dir,
            default_format: "json".to_string(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Export settings.
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Gets the platform-specific configuration directory.
    ///
    /// - Linux: `~/.config/IconForge/`
    /// - macOS: `~/Library/Application Support/IconForge/`
    /// - Windows: `%APPDATA%\IconForge\`
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_NAME))
            .context("Could not determine platform configuration directory")
    }

    /// Gets the path of the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be parsed;
    /// callers that want defaults use `Config::load().unwrap_or_default()`.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Saves the configuration to disk, creating the config directory if
    /// needed.
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let path = Self::config_path()?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}
