//! Error types for ledgerweb-config

use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("invalid YAML in config file: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("invalid field value: {field} - {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("io error: {0}")]
    Io(std::io::Error),
}

/// Result type with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
