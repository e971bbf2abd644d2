//! Configuration module for CampusPass.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::{PortalError, Result};

/// Portal information configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PortalConfig {
    /// Name of the portal.
    #[serde(default = "default_portal_name")]
    pub name: String,
    /// Institution the portal belongs to.
    #[serde(default = "default_institution")]
    pub institution: String,
}

fn default_portal_name() -> String {
    "CampusPass Attendance Portal".to_string()
}

fn default_institution() -> String {
    "Gautam Buddha University".to_string()
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            name: default_portal_name(),
            institution: default_institution(),
        }
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Artificial latency applied to login/register, in milliseconds.
    /// Stands in for the round trip a real identity service would take.
    #[serde(default = "default_simulated_latency_ms")]
    pub simulated_latency_ms: u64,
    /// Directory holding the persisted session slot.
    #[serde(default = "default_session_dir")]
    pub session_dir: String,
}

fn default_simulated_latency_ms() -> u64 {
    1000
}

fn default_session_dir() -> String {
    "data".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: default_simulated_latency_ms(),
            session_dir: default_session_dir(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/campuspass.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Portal information.
    #[serde(default)]
    pub portal: PortalConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content).map_err(|e| PortalError::Config(e.to_string()))?;
        Ok(config)
    }
}
