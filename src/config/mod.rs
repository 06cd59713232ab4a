//! Configuration module for the portal backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file holding locale preferences
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Simulated latency of citizen and staff sign-in
    pub login_delay: Duration,
    /// Simulated latency of complaint submission
    pub submit_delay: Duration,
    /// Idle time after which a session is dropped; zero disables expiry
    pub session_ttl: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let db_path = lookup("PORTAL_DB_PATH")
            .unwrap_or_else(|| "./data/portal.sqlite".to_string())
            .into();

        let bind_addr = parse("PORTAL_BIND_ADDR", lookup("PORTAL_BIND_ADDR"), "127.0.0.1:8080")?;

        let log_level = lookup("PORTAL_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let login_delay = Duration::from_millis(parse(
            "PORTAL_LOGIN_DELAY_MS",
            lookup("PORTAL_LOGIN_DELAY_MS"),
            "1000",
        )?);

        let submit_delay = Duration::from_millis(parse(
            "PORTAL_SUBMIT_DELAY_MS",
            lookup("PORTAL_SUBMIT_DELAY_MS"),
            "2000",
        )?);

        let session_ttl = Duration::from_secs(parse(
            "PORTAL_SESSION_TTL_SECS",
            lookup("PORTAL_SESSION_TTL_SECS"),
            "1800",
        )?);

        Ok(Self {
            db_path,
            bind_addr,
            log_level,
            login_delay,
            submit_delay,
            session_ttl,
        })
    }
}

fn parse<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: &str,
) -> Result<T, ConfigError> {
    let value = value.unwrap_or_else(|| default.to_string());
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::from_lookup(|_| None).unwrap();

        assert_eq!(config.db_path, PathBuf::from("./data/portal.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.login_delay, Duration::from_millis(1000));
        assert_eq!(config.submit_delay, Duration::from_millis(2000));
        assert_eq!(config.session_ttl, Duration::from_secs(1800));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(|name| match name {
            "PORTAL_SUBMIT_DELAY_MS" => Some("0".to_string()),
            "PORTAL_BIND_ADDR" => Some("0.0.0.0:9000".to_string()),
            "PORTAL_SESSION_TTL_SECS" => Some("0".to_string()),
            _ => None,
        })
        .unwrap();

        assert!(config.session_ttl.is_zero());

        assert_eq!(config.submit_delay, Duration::ZERO);
        assert_eq!(config.bind_addr.port(), 9000);
    }

    #[test]
    fn test_malformed_value() {
        let err = Config::from_lookup(|name| {
            (name == "PORTAL_LOGIN_DELAY_MS").then(|| "soon".to_string())
        })
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for PORTAL_LOGIN_DELAY_MS: 'soon'"
        );
    }
}
