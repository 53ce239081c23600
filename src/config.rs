//! Application configuration management
//!
//! This module handles loading and validating configuration from environment
//! variables (and an optional `.env` file). Command line flags override these
//! values in `main`.

use std::env;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_CONTEST_DIR, DEFAULT_LOG_FILTER, DEFAULT_PASSWORD_ALPHABET, DEFAULT_PASSWORD_LENGTH,
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub contest: ContestDirConfig,
    pub password: PasswordConfig,
    pub log: LogConfig,
}

/// Location of the contest directory
#[derive(Debug, Clone)]
pub struct ContestDirConfig {
    pub root: PathBuf,
}

/// Password generation settings
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    pub alphabet: String,
    pub length: usize,
}

/// Log output settings
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub rust_log: String,
    pub format: LogFormat,
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            contest: ContestDirConfig::from_env(),
            password: PasswordConfig::from_env()?,
            log: LogConfig::from_env()?,
        })
    }
}

impl ContestDirConfig {
    fn from_env() -> Self {
        Self {
            root: PathBuf::from(
                env::var("ROSTER_CONTEST_DIR").unwrap_or_else(|_| DEFAULT_CONTEST_DIR.to_string()),
            ),
        }
    }
}

impl PasswordConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let alphabet = env::var("ROSTER_PASSWORD_ALPHABET")
            .unwrap_or_else(|_| DEFAULT_PASSWORD_ALPHABET.to_string());
        if alphabet.is_empty() {
            return Err(ConfigError::InvalidValue(
                "ROSTER_PASSWORD_ALPHABET".to_string(),
            ));
        }

        Ok(Self {
            alphabet,
            length: env::var("ROSTER_PASSWORD_LENGTH")
                .unwrap_or_else(|_| DEFAULT_PASSWORD_LENGTH.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("ROSTER_PASSWORD_LENGTH".to_string()))?,
        })
    }
}

impl LogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
            format: LogFormat::parse(&env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string()))?,
        })
    }
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.to_ascii_lowercase().as_str() {
            "text" | "" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue("LOG_FORMAT".to_string())),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
