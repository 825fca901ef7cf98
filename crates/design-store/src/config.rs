//! Configuration management for the design store
//!
//! Loads configuration from environment variables with sensible defaults.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Directory holding the static frontend shell
    pub public_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),

            port: env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .context("Invalid PORT")?,

            public_dir: env::var("PUBLIC_DIR")
                .unwrap_or_else(|_| "./public".to_string())
                .into(),
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("PORT must be greater than 0");
        }

        Ok(())
    }

    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Warn when the frontend directory is missing; the API still works
    /// without it, the fallback route just 404s.
    pub fn check_public_dir(&self) {
        if !self.public_dir.exists() {
            tracing::warn!(
                "Public directory does not exist: {}",
                self.public_dir.display()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        // Clear any existing environment variables
        env::remove_var("HOST");
        env::remove_var("PORT");
        env::remove_var("PUBLIC_DIR");

        let config = Config::from_env().expect("Failed to load config");

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3001);
        assert_eq!(config.public_dir, PathBuf::from("./public"));
    }

    #[test]
    fn test_address() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 9000,
            public_dir: PathBuf::from("./public"),
        };

        assert_eq!(config.address(), "127.0.0.1:9000");
    }

    #[test]
    fn test_validate_invalid_port() {
        let config = Config {
            host: "0.0.0.0".to_string(),
            port: 0,
            public_dir: PathBuf::from("./public"),
        };

        let result = config.validate();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("PORT must be greater than 0"));
    }
}
