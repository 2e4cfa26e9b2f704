//! Configuration management for the web tools server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (and a `.env` file) or defaults.
//! The configuration is built once in `main` and handed to the server; no
//! other module reads the environment.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use super::transport::HttpConfig;

/// Main configuration structure for the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP listener and CORS configuration.
    pub http: HttpConfig,

    /// Catalog database configuration.
    pub database: DatabaseConfig,

    /// Static frontend configuration.
    pub assets: AssetsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server, used in log output.
    pub name: String,

    /// The version reported by `/health`.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Output format.
    pub format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line.
    Json,
    /// Human-readable lines.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" | "text" => Ok(Self::Pretty),
            other => Err(Error::config(format!("unknown log format '{}'", other))),
        }
    }
}

/// Catalog database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path of the SQLite file. Parent directories are created on start.
    pub path: PathBuf,
}

/// Static frontend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Directory holding `index.html` and `assets/`.
    pub dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "web-tools-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Json,
            },
            http: HttpConfig::default(),
            database: DatabaseConfig {
                path: PathBuf::from("./data/web-tools.db"),
            },
            assets: AssetsConfig {
                dir: PathBuf::from("./dist"),
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `SERVER_NAME`, `LOG_LEVEL`, `LOG_FORMAT`,
    /// `HOST`, `PORT`, `CORS_ORIGIN`, `CORS_ENABLED`, `DB_PATH`, `STATIC_DIR`.
    ///
    /// An unknown `LOG_FORMAT` is an error; other unparsable values fall back
    /// to their defaults.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(format) = std::env::var("LOG_FORMAT") {
            config.logging.format = format.parse()?;
        }

        config.http = HttpConfig::from_env();

        if let Ok(path) = std::env::var("DB_PATH") {
            config.database.path = PathBuf::from(path);
        }

        if let Ok(dir) = std::env::var("STATIC_DIR") {
            config.assets.dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}
