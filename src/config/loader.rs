use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::ShimmerConfiguration;

/// Errors that can occur when loading a shimmer configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl ShimmerConfiguration {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/shimmer/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("shimmer").join("config.toml")
    }

    /// Loads the configuration from the default config file.
    ///
    /// A missing file yields the canonical default look.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(ShimmerConfiguration::default());
        }

        Self::load_from(&path)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// Fields missing from the file keep their default value. Suspicious
    /// values are logged and kept as-is; only I/O and parse failures are
    /// reported as errors.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: ShimmerConfiguration =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        if let Err(e) = config.validate() {
            tracing::warn!(path = %path.display(), "{}", e);
        }
        Ok(config)
    }

    /// Checks the configuration for values that render degenerately.
    ///
    /// Checks:
    /// - `duration` is finite and positive
    /// - `opacity` lies in `[0, 1]`
    /// - the gradient has at least one stop
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(ConfigError::ValidationError {
                message: format!("duration must be positive, got {}", self.duration),
            });
        }

        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ConfigError::ValidationError {
                message: format!("opacity must be within [0, 1], got {}", self.opacity),
            });
        }

        if self.gradient.stops.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "gradient must have at least one stop".to_string(),
            });
        }

        Ok(())
    }
}
