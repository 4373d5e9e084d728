//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Values from a `.env` file are picked up when `main.rs` calls `dotenvy::dotenv()`,
//! and command-line flags (see [`crate::cli`]) override them.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `NOT_FOUND_MODE` - How missing links are answered: `empty` or `status` (default: `empty`)
//! - `SEED_LINKS` - Seed the default links at startup (default: `true`)

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Errors raised while parsing configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("LOG_FORMAT must be 'text' or 'json', got '{0}'")]
    InvalidLogFormat(String),

    #[error("NOT_FOUND_MODE must be 'empty' or 'status', got '{0}'")]
    InvalidNotFoundMode(String),
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// How `GET`/`PATCH` on a missing link id are answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotFoundMode {
    /// `200 OK` with an empty body, matching the long-standing API contract.
    #[default]
    Empty,
    /// `404 Not Found` with the JSON error envelope.
    Status,
}

impl FromStr for NotFoundMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "empty" => Ok(Self::Empty),
            "status" => Ok(Self::Status),
            _ => Err(ConfigError::InvalidNotFoundMode(s.to_string())),
        }
    }
}

impl fmt::Display for NotFoundMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Status => write!(f, "status"),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: LogFormat,
    pub not_found_mode: NotFoundMode,
    /// When false the registry starts empty and ids begin at 1.
    pub seed_links: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            not_found_mode: NotFoundMode::Empty,
            seed_links: true,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `LOG_FORMAT` or `NOT_FOUND_MODE` hold unknown values.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);

        let log_format = match env::var("LOG_FORMAT") {
            Ok(v) => v.parse().context("Failed to load LOG_FORMAT")?,
            Err(_) => defaults.log_format,
        };

        let not_found_mode = match env::var("NOT_FOUND_MODE") {
            Ok(v) => v.parse().context("Failed to load NOT_FOUND_MODE")?,
            Err(_) => defaults.not_found_mode,
        };

        let seed_links = env::var("SEED_LINKS")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(defaults.seed_links);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            not_found_mode,
            seed_links,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `listen_addr` is not `host:port` with a numeric port,
/// or if `log_level` is blank.
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        // Host names are resolved at bind time; only the port is checked here.
        let (host, port) = self
            .listen_addr
            .rsplit_once(':')
            .unwrap_or((self.listen_addr.as_str(), ""));
        if host.is_empty() {
            anyhow::bail!("LISTEN host must not be empty, got '{}'", self.listen_addr);
        }
        port.parse::<u16>()
            .with_context(|| format!("LISTEN port is not a valid number: '{}'", self.listen_addr))?;

        if self.log_level.trim().is_empty() {
            anyhow::bail!("RUST_LOG must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Not-found mode: {}", self.not_found_mode);
        tracing::info!("  Seed links: {}", self.seed_links);
    }
}
