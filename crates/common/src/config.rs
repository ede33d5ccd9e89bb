//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (PostgreSQL)
    pub database_url: String,

    /// Secret used to sign identity tokens
    pub jwt_secret: String,

    /// Identity token lifetime in seconds
    pub jwt_expiry_seconds: i64,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

/// A required environment variable, with the variable named in the error
fn required(name: &str) -> Result<String> {
    env::var(name).map_err(|_| anyhow::anyhow!("{name} is required"))
}

/// An optional environment variable with a fallback
fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiry_seconds: env_or("JWT_EXPIRY_SECONDS", "3600")
                .parse()
                .map_err(|_| anyhow::anyhow!("JWT_EXPIRY_SECONDS must be an integer"))?,
            rust_log: env_or("RUST_LOG", "jobstack=debug"),
            port: env_or("PORT", "3000").parse().unwrap_or(3000),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore] // Requires .env file with all config vars - run locally only
    fn test_config_from_env_loads_successfully() {
        let config = Config::from_env().expect("config should load in a dev environment");
        assert!(!config.database_url.is_empty());
        assert!(!config.jwt_secret.is_empty());
        assert!(config.jwt_expiry_seconds > 0);
        assert!(config.port > 0);
    }

    #[test]
    fn test_env_or_falls_back() {
        assert_eq!(env_or("JOBSTACK_TEST_UNSET_VAR", "fallback"), "fallback");
    }

    #[test]
    fn test_required_names_the_variable() {
        let err = required("JOBSTACK_TEST_UNSET_VAR").unwrap_err();
        assert!(err.to_string().contains("JOBSTACK_TEST_UNSET_VAR"));
    }
}
