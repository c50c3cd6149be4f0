// ABOUTME: Environment configuration for the Cookbook server and client
// ABOUTME: Parses the persistence connection string, listening port, CORS origins, and relay credentials
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-based configuration management
//!
//! All settings come from the process environment (optionally seeded from a
//! `.env` file). There is no configuration file.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::{info, warn};
use url::Url;

/// Default listening port
pub const DEFAULT_HTTP_PORT: u16 = 8080;
/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default persistence connection string
pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/cookbook.db";
/// Default directory holding the single-page application
pub const DEFAULT_STATIC_DIR: &str = "static";
/// Default base URL the client talks to
pub const DEFAULT_API_URL: &str = "http://localhost:8080";
/// Default image host upload API
pub const DEFAULT_IMAGE_HOST_URL: &str = "https://api.cloudinary.com/v1_1";
/// Default request body limit (JSON bodies only carry text fields)
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Strongly typed `LOG_LEVEL` value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Default operational logging
    #[default]
    Info,
    /// Verbose diagnostics
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe persistence connection string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database file
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (tests and throwaway demos)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// A bare path is treated as an `SQLite` file.
    ///
    /// # Errors
    ///
    /// Returns an error for connection strings of unsupported backends
    pub fn parse_url(s: &str) -> Result<Self> {
        if let Some(path_str) = s.strip_prefix("sqlite:") {
            let path_str = path_str.trim_start_matches("//");
            if path_str == ":memory:" {
                Ok(Self::Memory)
            } else {
                Ok(Self::SQLite {
                    path: PathBuf::from(path_str),
                })
            }
        } else if s.contains("://") {
            Err(anyhow!(
                "Unsupported DATABASE_URL scheme in '{s}': only sqlite: URLs are supported"
            ))
        } else {
            Ok(Self::SQLite {
                path: PathBuf::from(s),
            })
        }
    }

    /// Convert to a `sqlx` connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/cookbook.db"),
        }
    }
}

impl std::fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Persistence settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection string
    pub url: DatabaseUrl,
    /// Pool size (forced to 1 for in-memory databases)
    pub max_connections: u32,
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// `*` or a comma-separated origin list
    pub allowed_origins: String,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Persistence configuration
    pub database: DatabaseConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Directory holding `index.html` and its assets
    pub static_dir: PathBuf,
    /// Maximum accepted request body size
    pub max_body_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let config = Self {
            host: env_var_or("HOST", DEFAULT_HOST),
            http_port: http_port()?,
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&env_var_or("DATABASE_URL", DEFAULT_DATABASE_URL))?,
                max_connections: env_var_or("DATABASE_MAX_CONNECTIONS", "5")
                    .parse()
                    .context("Invalid DATABASE_MAX_CONNECTIONS value")?,
            },
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
            static_dir: PathBuf::from(env_var_or("STATIC_DIR", DEFAULT_STATIC_DIR)),
            max_body_bytes: env_var_or("MAX_BODY_BYTES", &DEFAULT_MAX_BODY_BYTES.to_string())
                .parse()
                .context("Invalid MAX_BODY_BYTES value")?,
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Configuration suitable for tests: in-memory store, ephemeral port
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            http_port: 0,
            environment: Environment::Testing,
            database: DatabaseConfig {
                url: DatabaseUrl::Memory,
                max_connections: 1,
            },
            cors: CorsConfig {
                allowed_origins: "*".to_owned(),
            },
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value
    pub fn validate(&self) -> Result<()> {
        if self.database.max_connections == 0 {
            return Err(anyhow!("DATABASE_MAX_CONNECTIONS must be at least 1"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("MAX_BODY_BYTES must be positive"));
        }
        if !self.static_dir.join("index.html").exists() {
            warn!(
                "STATIC_DIR {} has no index.html; the SPA fallback will return 404",
                self.static_dir.display()
            );
        }
        Ok(())
    }

    /// `host:port` string to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Human-readable summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Cookbook Server Configuration:\n\
             - Bind: {}\n\
             - Environment: {}\n\
             - Database: {}\n\
             - Static Dir: {}\n\
             - CORS Origins: {}",
            self.bind_address(),
            self.environment,
            if self.database.url.is_memory() {
                "SQLite (in-memory)"
            } else {
                "SQLite"
            },
            self.static_dir.display(),
            self.cors.allowed_origins,
        )
    }
}

/// Image host (unsigned upload) settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRelayConfig {
    /// Upload API root; the cloud name is appended
    pub base_url: String,
    /// Cloud account name
    pub cloud_name: String,
    /// Unsigned upload preset name
    pub upload_preset: String,
}

impl ImageRelayConfig {
    /// Load relay settings; `None` when no cloud account is configured
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let cloud_name = non_empty_var("CLOUDINARY_CLOUD_NAME")?;
        let Some(upload_preset) = non_empty_var("CLOUDINARY_UPLOAD_PRESET") else {
            warn!("CLOUDINARY_CLOUD_NAME is set but CLOUDINARY_UPLOAD_PRESET is not; image uploads disabled");
            return None;
        };

        Some(Self {
            base_url: env_var_or("CLOUDINARY_BASE_URL", DEFAULT_IMAGE_HOST_URL),
            cloud_name,
            upload_preset,
        })
    }

    /// Full upload endpoint
    #[must_use]
    pub fn upload_url(&self) -> String {
        format!(
            "{}/{}/image/upload",
            self.base_url.trim_end_matches('/'),
            self.cloud_name
        )
    }
}

/// Client (presentation layer) configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Entry Service
    pub api_url: Url,
    /// Image relay settings, if uploads are enabled
    pub image_relay: Option<ImageRelayConfig>,
}

impl ClientConfig {
    /// Load client configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `COOKBOOK_API_URL` is not a valid URL
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env file loaded: {}", e);
        }

        let raw = env_var_or("COOKBOOK_API_URL", DEFAULT_API_URL);
        Ok(Self {
            api_url: Url::parse(&raw).with_context(|| format!("Invalid COOKBOOK_API_URL: {raw}"))?,
            image_relay: ImageRelayConfig::from_env(),
        })
    }
}

/// `PORT` wins over `HTTP_PORT`; both fall back to the default
fn http_port() -> Result<u16> {
    env::var("PORT")
        .or_else(|_| env::var("HTTP_PORT"))
        .map_or(Ok(DEFAULT_HTTP_PORT), |raw| {
            raw.trim()
                .parse()
                .with_context(|| format!("Invalid PORT value: {raw}"))
        })
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
