//! Configuration management for Valet
//!
//! This module handles loading, validation, and management of the
//! application configuration from YAML files.

use crate::error::{Result, ValetError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// History report rendering options
    pub report: ReportConfig,

    /// Movement journal replayed by the binary
    pub journal: JournalConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    pub level: String,

    /// Directory (or file path whose parent is used) for daily-rolled
    /// log files
    pub file: String,

    /// Number of rolled log files to keep
    pub backup_count: u32,

    /// Whether to log to console
    pub console_output: bool,

    /// Whether to use JSON format
    pub json_format: bool,
}

/// History report rendering options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Sort garage groups by name instead of first-visit order
    pub sort_by_name: bool,

    /// Prefix written before each session line
    pub indent: String,
}

/// Movement journal location
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    /// Path of the YAML movement journal
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "INFO".to_string(),
            file: "/tmp/valet.log".to_string(),
            backup_count: 5,
            console_output: true,
            json_format: false,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sort_by_name: false,
            indent: "\t".to_string(),
        }
    }
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            file: "valet_journal.yaml".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from the default locations
    pub fn load() -> Result<Self> {
        let default_paths = ["valet_config.yaml", "/etc/valet/config.yaml"];

        for path in &default_paths {
            if Path::new(path).exists() {
                return Self::from_file(path);
            }
        }

        // Fall back to default configuration
        Ok(Config::default())
    }

    /// Save configuration to a YAML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match self.logging.level.to_uppercase().as_str() {
            "TRACE" | "DEBUG" | "INFO" | "WARN" | "ERROR" => {}
            _ => {
                return Err(ValetError::validation(
                    "logging.level",
                    "Unknown log level",
                ));
            }
        }

        if self.logging.backup_count == 0 {
            return Err(ValetError::validation(
                "logging.backup_count",
                "Must be greater than 0",
            ));
        }

        if self.journal.file.trim().is_empty() {
            return Err(ValetError::validation(
                "journal.file",
                "Journal path cannot be empty",
            ));
        }

        Ok(())
    }
}
