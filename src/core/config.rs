//! Configuration management for the API server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::transport::HttpConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Main configuration structure for the API server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Location of the collection files.
    pub storage: StorageConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP listener configuration.
    pub http: HttpConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Where the JSON collections live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding both collection files.
    pub data_dir: PathBuf,

    /// File name of the resource collection.
    pub resources_file: String,

    /// File name of the rating collection.
    pub ratings_file: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "resource-api".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            resources_file: "resources.json".to_string(),
            ratings_file: "ratings.json".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl StorageConfig {
    /// Full path of the resource collection file.
    pub fn resources_path(&self) -> PathBuf {
        self.data_dir.join(&self.resources_file)
    }

    /// Full path of the rating collection file.
    pub fn ratings_path(&self) -> PathBuf {
        self.data_dir.join(&self.ratings_file)
    }

    /// Storage rooted at `data_dir` with default file names.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Variables are prefixed with `RESOURCE_API_`, for example
    /// `RESOURCE_API_DATA_DIR` or `RESOURCE_API_LOG_LEVEL`. The listening
    /// port also honours a plain `PORT`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("RESOURCE_API_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("RESOURCE_API_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(dir) = std::env::var("RESOURCE_API_DATA_DIR") {
            config.storage.data_dir = PathBuf::from(dir);
        }

        if let Ok(file) = std::env::var("RESOURCE_API_RESOURCES_FILE") {
            config.storage.resources_file = file;
        }

        if let Ok(file) = std::env::var("RESOURCE_API_RATINGS_FILE") {
            config.storage.ratings_file = file;
        }

        config.http = HttpConfig::from_env();

        info!("Data directory: {}", config.storage.data_dir.display());

        config
    }
}
