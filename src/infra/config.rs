//! Centralized configuration (environment variables + defaults).

use anyhow::Context;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Runtime settings for the API server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// When unset the settings store falls back to the in-memory implementation.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub log_format: LogFormat,
    /// Values that were rejected and replaced by defaults. Logged once the
    /// subscriber is installed, since config is read before logging starts.
    pub warnings: Vec<String>,
}

impl AppConfig {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup (used by tests).
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .with_context(|| format!("BIND_ADDR must be a socket address, got '{}'", bind_raw))?;

        let mut warnings = Vec::new();
        let database_url = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty());

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(v) => match v.parse::<u32>() {
                Ok(n) => n.max(1),
                Err(_) => {
                    warnings.push(format!(
                        "DATABASE_MAX_CONNECTIONS '{}' is not a valid u32, using {}",
                        v, DEFAULT_MAX_CONNECTIONS
                    ));
                    DEFAULT_MAX_CONNECTIONS
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let log_format = match lookup("LOG_FORMAT").map(|f| f.trim().to_lowercase()) {
            Some(f) if f == "json" => LogFormat::Json,
            Some(f) if f.is_empty() || f == "text" => LogFormat::Text,
            Some(f) => {
                warnings.push(format!("LOG_FORMAT '{}' is not text or json, using text", f));
                LogFormat::Text
            }
            None => LogFormat::Text,
        };

        Ok(Self {
            bind_addr,
            database_url,
            database_max_connections,
            log_format,
            warnings,
        })
    }
}
