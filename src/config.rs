//! Configuration management and validation.
//!
//! Provides the formatting configuration shared by the CLI and records, loaded
//! in layers: built-in defaults, then an optional TOML file, then environment
//! variables, then command-line overrides.

use crate::app::services::numeric::{FloatFormat, FloatStyle};
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, ENV_FLOAT_STYLE, ENV_PRECISION, MAX_COORDINATE_LENGTH,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Float formatting applied to values and coordinates
    pub format: FloatFormat,

    /// Log filter directive used when neither `RUST_LOG` nor `-v`/`-q` is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Config {
    /// Default configuration file location (`<config_dir>/feed-record/config.toml`)
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file '{}'", path.display()),
                e,
            )
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::config_parse(path.display().to_string(), e))?;

        debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Load configuration with layered approach (defaults -> file -> env)
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides read through `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(style) = lookup(ENV_FLOAT_STYLE) {
            self.format.style = style.parse()?;
            debug!("Float style overridden by {}: {}", ENV_FLOAT_STYLE, self.format.style);
        }

        if let Some(precision) = lookup(ENV_PRECISION) {
            self.format.precision = precision.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "Invalid {} value '{}': must be a non-negative integer",
                    ENV_PRECISION, precision
                ))
            })?;
            debug!("Precision overridden by {}: {}", ENV_PRECISION, self.format.precision);
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Widest latitude/longitude is "-180." plus the fraction
        if self.format.precision + 5 > MAX_COORDINATE_LENGTH {
            return Err(Error::configuration(format!(
                "Precision {} cannot fit a {} byte coordinate",
                self.format.precision, MAX_COORDINATE_LENGTH
            )));
        }

        // Elevation needs at least "0." plus the fraction
        if self.format.elevation_precision + 2 > MAX_COORDINATE_LENGTH {
            return Err(Error::configuration(format!(
                "Elevation precision {} cannot fit a {} byte coordinate",
                self.format.elevation_precision, MAX_COORDINATE_LENGTH
            )));
        }

        if let Some(level) = &self.log_level {
            if level.trim().is_empty() {
                return Err(Error::configuration("Log level cannot be empty"));
            }
        }

        Ok(())
    }

    /// Set the float style
    pub fn with_float_style(mut self, style: FloatStyle) -> Self {
        self.format.style = style;
        self
    }

    /// Set the default precision
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.format.precision = precision;
        self
    }

    /// Set the elevation precision
    pub fn with_elevation_precision(mut self, precision: usize) -> Self {
        self.format.elevation_precision = precision;
        self
    }
}
