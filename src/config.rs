//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_NAME, DEFAULT_COLOR_COUNT, MAX_COLOR_COUNT};
use crate::models::ShadeTable;
use crate::services::{EngineSettings, GeneratorSettings};

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "PALLY_CONFIG_DIR";

/// Slot count limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Slot count for new and reset palettes
    pub default_count: usize,
    /// Largest slot count a palette may grow to
    pub max_count: usize,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            default_count: DEFAULT_COLOR_COUNT,
            max_count: MAX_COLOR_COUNT,
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory for auto-named exports (current directory when unset)
    pub output_dir: Option<PathBuf>,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Pally/config.toml`
/// - macOS: `~/Library/Application Support/Pally/config.toml`
/// - Windows: `%APPDATA%\Pally\config.toml`
///
/// Set `PALLY_CONFIG_DIR` to use another directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Slot count limits
    pub palette: PaletteConfig,
    /// Base color generation
    pub generator: GeneratorSettings,
    /// Shade offset table
    pub shades: ShadeTable,
    /// Export settings
    pub export: ExportConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// Uses `PALLY_CONFIG_DIR` when set, otherwise the platform config
    /// directory joined with `Pally`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path using temp file + rename.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `max_count` is at least 1 and `default_count` is within `1..=max_count`
    /// - generator saturation and lightness are within `[0, 1]`
    /// - `min_hue_distance` is non-negative and `max_attempts` is positive
    /// - shade `desaturation` is within `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        let palette = &self.palette;
        if palette.max_count == 0 {
            anyhow::bail!("palette.max_count must be at least 1");
        }
        if palette.default_count == 0 || palette.default_count > palette.max_count {
            anyhow::bail!(
                "palette.default_count must be between 1 and {} (got {})",
                palette.max_count,
                palette.default_count
            );
        }

        let generator = &self.generator;
        for (key, value) in [
            ("generator.ramp_saturation", generator.ramp_saturation),
            ("generator.ramp_lightness", generator.ramp_lightness),
            ("generator.random_saturation", generator.random_saturation),
            ("generator.random_lightness", generator.random_lightness),
            ("shades.desaturation", self.shades.desaturation),
        ] {
            if !(0.0..=1.0).contains(&value) {
                anyhow::bail!("{key} must be between 0.0 and 1.0 (got {value})");
            }
        }

        if generator.min_hue_distance.is_nan() || generator.min_hue_distance < 0.0 {
            anyhow::bail!(
                "generator.min_hue_distance must not be negative (got {})",
                generator.min_hue_distance
            );
        }
        if generator.max_attempts == 0 {
            anyhow::bail!("generator.max_attempts must be at least 1");
        }

        for (key, value) in [
            ("shades.dark", self.shades.dark),
            ("shades.light", self.shades.light),
            ("shades.lighter", self.shades.lighter),
        ] {
            if !value.is_finite() {
                anyhow::bail!("{key} must be a finite number");
            }
        }

        Ok(())
    }

    /// Engine parameters derived from this configuration.
    #[must_use]
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            default_count: self.palette.default_count,
            max_count: self.palette.max_count,
            generator: self.generator.clone(),
            shades: self.shades,
        }
    }

    /// Directory auto-named exports are written to.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.export
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
