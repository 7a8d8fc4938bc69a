//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory resolution.

use crate::export::DEFAULT_APP_VERSION;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Export defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory exported profiles are written to by default
    pub output_dir: PathBuf,
    /// `appversion` attribute the exported document declares
    pub app_version: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            app_version: DEFAULT_APP_VERSION.to_string(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Export defaults
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Gets the platform configuration directory.
    ///
    /// - Linux: `~/.config/padbind/`
    /// - macOS: `~/Library/Application Support/padbind/`
    /// - Windows: `%APPDATA%\padbind\`
    pub fn config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine platform config directory")?;
        Ok(base.join("padbind"))
    }

    /// Gets the configuration file path.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads the configuration, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_file()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Saves the configuration, creating the config directory if needed.
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let path = Self::config_file()?;
        let text = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, text)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
