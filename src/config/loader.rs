use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::registry::normalize;

/// Errors that can occur when loading configuration.
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

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/clui/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("clui").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise behaves like [`load_from`](Self::load_from).
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads, parses and validates an explicit config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::debug!(
            path = %path.display(),
            commands = config.commands.len(),
            "Loaded config"
        );
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The tool name is not empty
    /// - No two commands share a path once normalized
    /// - Flag names are bare words: not empty, no leading `-`, no `=` or whitespace
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app.name.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "App name must not be empty".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for command in &self.commands {
            let path = normalize(&command.path);
            if !seen.insert(path.clone()) {
                return Err(ConfigError::ValidationError {
                    message: format!("Duplicate command path '{}'", path),
                });
            }

            for flag in &command.flags {
                let malformed = flag.is_empty()
                    || flag.starts_with('-')
                    || flag.contains('=')
                    || flag.contains(char::is_whitespace);
                if malformed {
                    return Err(ConfigError::ValidationError {
                        message: format!("Invalid flag name '{}' for command '{}'", flag, path),
                    });
                }
            }
        }

        Ok(())
    }
}
