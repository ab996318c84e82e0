//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the acadsync
//! API server. It retrieves configuration values from environment variables
//! and provides defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 5001)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `LAB_BATCH_COUNT`: Default batches per lab (default: 3)
//! - `LAB_BATCH_DURATION_MINUTES`: Default batch duration (default: 60)
//! - `LAB_DEFAULT_START`: Default wall-clock start as `HH:MM` (default: "09:00")

use acadsync_core::models::lab_schedule::SchedulerConfig;
use eyre::{eyre, Result, WrapErr};
use std::env;
use tracing::Level;

/// Configuration for the acadsync API server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Defaults for the lab batch scheduler
    pub scheduler: SchedulerConfig,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `DATABASE_URL` is not set
    /// - `API_PORT` cannot be parsed as a u16
    /// - `LAB_DEFAULT_START` is set but is not a valid `HH:MM` time
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "5001".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = env::var("DATABASE_URL")
            .wrap_err("DATABASE_URL environment variable must be set")?;

        // Logging settings
        let log_level = match env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS")
            .ok()
            .map(|origins| origins.split(',').map(|s| s.trim().to_string()).collect());

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Lab scheduler defaults
        let default_batch_count = env::var("LAB_BATCH_COUNT")
            .unwrap_or_else(|_| "3".to_string())
            .parse()
            .wrap_err("Invalid LAB_BATCH_COUNT value")?;
        let default_batch_duration_minutes = env::var("LAB_BATCH_DURATION_MINUTES")
            .unwrap_or_else(|_| "60".to_string())
            .parse()
            .wrap_err("Invalid LAB_BATCH_DURATION_MINUTES value")?;
        let (default_start_hour, default_start_minute) = match env::var("LAB_DEFAULT_START") {
            Ok(raw) => parse_wall_clock(&raw)?,
            Err(_) => (9, 0),
        };

        let scheduler = SchedulerConfig {
            default_batch_count,
            default_batch_duration_minutes,
            default_start_hour,
            default_start_minute,
        };

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            scheduler,
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:5001").
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parses an `HH:MM` wall-clock time.
fn parse_wall_clock(raw: &str) -> Result<(u32, u32)> {
    let (hour, minute) = raw
        .split_once(':')
        .ok_or_else(|| eyre!("Invalid LAB_DEFAULT_START value, expected HH:MM"))?;
    let hour: u32 = hour
        .trim()
        .parse()
        .wrap_err("Invalid LAB_DEFAULT_START hour")?;
    let minute: u32 = minute
        .trim()
        .parse()
        .wrap_err("Invalid LAB_DEFAULT_START minute")?;
    if hour > 23 || minute > 59 {
        return Err(eyre!("LAB_DEFAULT_START is out of range"));
    }
    Ok((hour, minute))
}
