//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Nothing here is re-read afterwards; the resulting [`Config`] is turned into
//! [`crate::state::AppState`] and shared read-only.
//!
//! ## Required Variables
//!
//! - `API_KEY` - Shared secret expected in the `X-API-Key` header
//!
//! ## Optional Variables
//!
//! - `LOG_LEVEL` - `debug`, `info`, `warn` or `error` (default: `info`; unknown values mean `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DEFAULT_LANGUAGE` - Fallback locale for messages (default: `en`)
//! - `SERVER_HOST` - Bind host (default: `localhost`)
//! - `SERVER_PORT` - Bind port (default: `8080`)
//! - `RUST_LOG` - Optional per-target filter layered over `LOG_LEVEL`

use anyhow::{Context, Result};
use std::env;

use crate::i18n::Locale;
use crate::logging::{LogFormat, LogLevel};

/// Service configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Shared secret compared against `X-API-Key`. Must be non-empty.
    pub api_key: String,
    pub log_level: String,
    pub log_format: String,
    pub default_language: String,
    pub server_host: String,
    pub server_port: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_KEY` is missing.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("API_KEY").context("API_KEY must be set")?;

        Ok(Self {
            api_key,
            log_level: env_or("LOG_LEVEL", "info"),
            log_format: env_or("LOG_FORMAT", "text"),
            default_language: env_or("DEFAULT_LANGUAGE", "en"),
            server_host: env_or("SERVER_HOST", "localhost"),
            server_port: env_or("SERVER_PORT", "8080"),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_key` is empty
    /// - `log_format` is not `text` or `json`
    /// - `server_port` is not a valid port number
    /// - `server_host` is empty
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            anyhow::bail!("API_KEY must not be empty");
        }

        if LogFormat::parse(&self.log_format).is_none() {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        self.server_port
            .parse::<u16>()
            .with_context(|| format!("SERVER_PORT must be a port number, got '{}'", self.server_port))?;

        if self.server_host.is_empty() {
            anyhow::bail!("SERVER_HOST must not be empty");
        }

        Ok(())
    }

    /// Bind address in `host:port` form.
    pub fn address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        let level = LogLevel::parse_lenient(&self.log_level);
        let fallback = Locale::from_code(&self.default_language).unwrap_or_default();

        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.address());
        tracing::info!("  API key: {}", mask_secret(&self.api_key));
        tracing::info!("  Log level: {}", level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Default language: {}", fallback);
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &mask_secret(&self.api_key))
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("default_language", &self.default_language)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

/// Returns the variable's value, or `default` when unset or empty.
fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Masks a secret for logging, keeping at most the first two characters.
///
/// - `supersecret` → `su***`
/// - `ab` → `***`
fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 4 {
        return "***".to_string();
    }

    let prefix: String = secret.chars().take(2).collect();
    format!("{prefix}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 6] = [
        "API_KEY",
        "LOG_LEVEL",
        "LOG_FORMAT",
        "DEFAULT_LANGUAGE",
        "SERVER_HOST",
        "SERVER_PORT",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    fn valid_config() -> Config {
        Config {
            api_key: "test-secret".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            default_language: "en".to_string(),
            server_host: "localhost".to_string(),
            server_port: "8080".to_string(),
        }
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("supersecret"), "su***");
        assert_eq!(mask_secret("abcd"), "***");
        assert_eq!(mask_secret(""), "***");
    }

    #[test]
    fn test_debug_hides_api_key() {
        let rendered = format!("{:?}", valid_config());
        assert!(!rendered.contains("test-secret"));
        assert!(rendered.contains("te***"));
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.api_key = String::new();
        assert!(config.validate().is_err());
        config.api_key = "test-secret".to_string();

        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.server_port = "http".to_string();
        assert!(config.validate().is_err());
        config.server_port = "70000".to_string();
        assert!(config.validate().is_err());
        config.server_port = "3000".to_string();

        // Unknown level and language are tolerated, they fall back at use site
        config.log_level = "verbose".to_string();
        config.default_language = "de".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_address() {
        let mut config = valid_config();
        config.server_host = "0.0.0.0".to_string();
        config.server_port = "3000".to_string();

        assert_eq!(config.address(), "0.0.0.0:3000");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        unsafe {
            env::set_var("API_KEY", "secret");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.api_key, "secret");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.default_language, "en");
        assert_eq!(config.address(), "localhost:8080");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        unsafe {
            env::set_var("API_KEY", "secret");
            env::set_var("LOG_LEVEL", "debug");
            env::set_var("DEFAULT_LANGUAGE", "kk");
            env::set_var("SERVER_HOST", "127.0.0.1");
            env::set_var("SERVER_PORT", "9090");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.default_language, "kk");
        assert_eq!(config.address(), "127.0.0.1:9090");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_missing_api_key_fails() {
        clear_env();

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("API_KEY"));
    }

    #[test]
    #[serial]
    fn test_empty_api_key_fails_validation() {
        clear_env();
        unsafe {
            env::set_var("API_KEY", "");
        }

        assert!(load_from_env().is_err());

        clear_env();
    }
}
