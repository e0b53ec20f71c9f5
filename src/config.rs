// src/config.rs

//! Application configuration loaded from environment variables.
//!
//! This module defines all startup-time configuration for the service.
//! Configuration is validated eagerly and failures are treated as
//! deployment errors rather than recoverable runtime conditions.

use anyhow::Result;
use std::time::Duration;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads a required environment variable.
///
/// Fails fast with a human-readable error if the variable is missing.
/// Missing configuration is a deployment error, not a runtime condition.
macro_rules! required_env {
    // ---
    ($key:literal) => {
        std::env::var($key)
            .map_err(|_| anyhow::anyhow!(concat!("Missing required configuration: ", $key)))?
    };
}

/// Reads an optional environment variable and attempts to parse it.
///
/// If the variable is missing or cannot be parsed, the provided
/// default value is used.
macro_rules! optional_env_parse {
    // ---
    ($key:literal, $ty:ty, $default:expr) => {
        std::env::var($key)
            .ok()
            .and_then(|v| v.parse::<$ty>().ok())
            .unwrap_or($default)
    };
}

#[cfg(test)]
/// Asserts that a configuration constructor fails due to a missing
/// required environment variable.
macro_rules! assert_missing_config {
    // ---
    ($expr:expr, $key:literal) => {{
        let err = $expr.expect_err("expected configuration error");
        assert!(
            err.to_string()
                .contains(concat!("Missing required configuration: ", $key)),
            "unexpected error: {err}"
        );
    }};
}

// ============================================================
// Public configuration facade
// ============================================================

/// Aggregated application configuration.
///
/// This is the single source of truth for startup configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: database::DatabaseConfig,
    pub server: server::ServerConfig,
}

impl AppConfig {
    /// Loads and validates all application configuration from the environment.
    ///
    /// # Errors
    /// Returns an error if any required configuration is missing or invalid.
    pub fn from_env() -> Result<Self> {
        // ---
        Ok(Self {
            database: database::DatabaseConfig::from_env()?,
            server: server::ServerConfig::from_env()?,
        })
    }
}

// ============================================================
// Database configuration
// ============================================================

mod database {
    // ---
    use super::*;

    /// Database-related configuration derived from environment variables.
    ///
    /// Pool defaults are kept small: the target is a serverless Postgres
    /// endpoint with a low connection limit.
    #[derive(Debug, Clone)]
    pub struct DatabaseConfig {
        /// PostgreSQL connection string.
        pub database_url: String,

        /// Number of connection attempts at startup. Defaults to 10.
        pub retry_count: u32,

        /// Pause between connection attempts. Defaults to 500 ms.
        pub retry_delay: Duration,

        /// Maximum time to wait when acquiring a connection from the pool. Defaults to 30 seconds.
        pub acquire_timeout: Duration,

        /// Minimum number of connections to keep in the pool, even when idle. Defaults to 1.
        pub min_connections: u32,

        /// Maximum number of connections open concurrently. Defaults to 5.
        pub max_connections: u32,
    }

    impl DatabaseConfig {
        /// Builds a [`DatabaseConfig`] from environment variables.
        ///
        /// # Errors
        /// Returns an error if `DATABASE_URL` is missing.
        pub fn from_env() -> Result<Self> {
            // ---
            let database_url = required_env!("DATABASE_URL");
            let retry_count = optional_env_parse!("APP_DB_RETRY_COUNT", u32, 10);
            let retry_delay_ms = optional_env_parse!("APP_DB_RETRY_DELAY_MS", u64, 500);
            let acquire_timeout_secs = optional_env_parse!("APP_DB_ACQUIRE_TIMEOUT_SEC", u64, 30);
            let min_connections = optional_env_parse!("APP_DB_MIN_CONNECTIONS", u32, 1);
            let max_connections = optional_env_parse!("APP_DB_MAX_CONNECTIONS", u32, 5);

            Ok(Self {
                database_url,
                retry_count,
                retry_delay: Duration::from_millis(retry_delay_ms),
                acquire_timeout: Duration::from_secs(acquire_timeout_secs),
                min_connections,
                max_connections,
            })
        }
    }
}
pub use database::DatabaseConfig;

// ============================================================
// Server configuration
// ============================================================

mod server {
    // ---
    use super::*;
    use std::net::SocketAddr;

    /// Which metrics backend to build at startup.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum MetricsKind {
        Noop,
        Prometheus,
    }

    /// HTTP server configuration.
    #[derive(Debug, Clone)]
    pub struct ServerConfig {
        /// Address the listener binds to. Defaults to 127.0.0.1:3000.
        pub bind_addr: SocketAddr,

        /// Metrics backend; `prom` selects Prometheus, anything else no-op.
        pub metrics: MetricsKind,
    }

    impl ServerConfig {
        /// Builds a [`ServerConfig`] from environment variables.
        ///
        /// # Errors
        /// Returns an error if `APP_BIND_ADDR` is set but is not a socket address.
        pub fn from_env() -> Result<Self> {
            // ---
            let bind_addr = match std::env::var("APP_BIND_ADDR") {
                Ok(raw) => raw.parse::<SocketAddr>().map_err(|err| {
                    anyhow::anyhow!("Invalid configuration APP_BIND_ADDR={raw}: {err}")
                })?,
                Err(_) => SocketAddr::from(([127, 0, 0, 1], 3000)),
            };

            let metrics = match std::env::var("APP_METRICS_TYPE").as_deref() {
                Ok("prom") => MetricsKind::Prometheus,
                _ => MetricsKind::Noop,
            };

            Ok(Self { bind_addr, metrics })
        }
    }
}
pub use server::{MetricsKind, ServerConfig};

// ============================================================
// Tests
// ============================================================
