//! Configuration loading and management

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub events: EventsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Credential store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// "sqlite" or "memory"
    #[serde(default = "default_backend")]
    pub backend: String,
    /// SQLite database file (sqlite backend only)
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            path: default_db_path(),
        }
    }
}

/// Event notification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsConfig {
    /// "database" (outbox table) or "log"
    #[serde(default = "default_sink")]
    pub sink: String,
    #[serde(default = "default_topic")]
    pub topic: String,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            sink: default_sink(),
            topic: default_topic(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

const BACKENDS: &[&str] = &["sqlite", "memory"];
const SINKS: &[&str] = &["database", "log"];
const LOG_FORMATS: &[&str] = &["pretty", "json"];

// Default value functions
fn default_backend() -> String {
    "sqlite".to_string()
}

fn default_db_path() -> String {
    "./data/login-svc.db".to_string()
}

fn default_sink() -> String {
    "database".to_string()
}

fn default_topic() -> String {
    login_core::LOGIN_EVENTS_TOPIC.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let config_path = Path::new(path);

        // Check if config file exists
        if !config_path.exists() {
            info!("Config file not found at {}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        config.validate()?;

        info!("Loaded configuration from {}", path);
        Ok(config)
    }

    /// Reject unknown backend, sink and format names
    pub fn validate(&self) -> Result<()> {
        if !BACKENDS.contains(&self.database.backend.as_str()) {
            bail!(
                "Unknown database backend '{}' (expected one of: {})",
                self.database.backend,
                BACKENDS.join(", ")
            );
        }
        if !SINKS.contains(&self.events.sink.as_str()) {
            bail!(
                "Unknown event sink '{}' (expected one of: {})",
                self.events.sink,
                SINKS.join(", ")
            );
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            bail!(
                "Unknown log format '{}' (expected one of: {})",
                self.logging.format,
                LOG_FORMATS.join(", ")
            );
        }
        if self.events.topic.is_empty() {
            bail!("Event topic cannot be empty");
        }
        Ok(())
    }

    /// SQLite connection URL for the configured database file
    pub fn database_url(&self) -> String {
        format!("sqlite:{}?mode=rwc", self.database.path)
    }
}
