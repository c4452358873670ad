//! Configuration management for ledgerweb
//!
//! Loads and validates the YAML configuration: where the HTTP server binds,
//! which ledger file is served, and how the external accounting tool is
//! invoked. Every field has a default, so a partial (or absent) file works.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use error::{ConfigError, ConfigResult};

// ==================== Configuration Types ====================

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

/// Ledger file and external tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Path to the ledger file every operation reads and rewrites
    #[serde(default = "default_ledger_file")]
    pub file: PathBuf,
    /// External accounting command used for report delegation
    #[serde(default = "default_ledger_command")]
    pub command: String,
    /// Script run after each write to refresh static reports
    #[serde(default = "default_update_reports_script")]
    pub update_reports_script: PathBuf,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            file: default_ledger_file(),
            command: default_ledger_command(),
            update_reports_script: default_update_reports_script(),
        }
    }
}

fn default_ledger_file() -> PathBuf {
    PathBuf::from("/var/www/ledger/data/demo.ledger")
}

fn default_ledger_command() -> String {
    "ledger".to_string()
}

fn default_update_reports_script() -> PathBuf {
    PathBuf::from("/var/www/ledger/update-reports.sh")
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Ledger file and external tool settings
    #[serde(default)]
    pub ledger: LedgerConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: PathBuf) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(&path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.to_string_lossy().to_string(),
                }
            } else {
                ConfigError::Io(err)
            }
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if self.ledger.file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "ledger.file".to_string(),
                reason: "Ledger file path must not be empty".to_string(),
            });
        }

        if self.ledger.command.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "ledger.command".to_string(),
                reason: "Accounting command must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }
}

// ==================== Tests ====================
