//! Application configuration management.
//!
//! Configuration is loaded once at startup from environment variables (with
//! `.env` support via dotenvy). Every variable has a default, so the service
//! runs with zero configuration; invalid values are rejected with a clear
//! error instead of being silently replaced.
//!
//! # Environment Variables
//!
//! - `APP_HOST`: HTTP server host (default: "0.0.0.0")
//! - `APP_PORT`: HTTP server port (default: 8080)
//! - `BINLIST_URL`: BIN lookup service base URL
//!   (default: "https://lookup.binlist.net")
//! - `FALLBACK_COUNTRY`: sentinel country key for the fallback cost bucket
//!   (default: "OTHERS")

use std::env;

use thiserror::Error;

/// Default base URL of the external BIN lookup service.
pub const DEFAULT_BINLIST_URL: &str = "https://lookup.binlist.net";

/// Default sentinel country key for the fallback cost bucket.
pub const DEFAULT_FALLBACK_COUNTRY: &str = "OTHERS";

/// Errors that can occur when loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable is set but has an unusable value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP server host address.
    pub app_host: String,
    /// HTTP server port.
    pub app_port: u16,
    /// Base URL of the external BIN lookup service.
    pub binlist_url: String,
    /// Sentinel country key queried when a resolved country has no dedicated
    /// cost record.
    pub fallback_country: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_host: "0.0.0.0".to_string(),
            app_port: 8080,
            binlist_url: DEFAULT_BINLIST_URL.to_string(),
            fallback_country: DEFAULT_FALLBACK_COUNTRY.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// Reads `.env` first if present, then the process environment. Missing
    /// variables fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but cannot
    /// be parsed (e.g. a non-numeric `APP_PORT`).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let app_host = get_optional_env("APP_HOST", defaults.app_host);
        let app_port = get_optional_env_parsed("APP_PORT", defaults.app_port)?;
        let binlist_url = get_optional_env("BINLIST_URL", defaults.binlist_url);
        let fallback_country = get_optional_env("FALLBACK_COUNTRY", defaults.fallback_country);

        Ok(Self {
            app_host,
            app_port,
            binlist_url,
            fallback_country,
        })
    }
}

/// Gets an optional environment variable with a default value.
fn get_optional_env(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

/// Gets an optional environment variable and parses it, with a default value.
fn get_optional_env_parsed<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    env::var(key).map_or_else(
        |_| Ok(default),
        |value| {
            value.parse().map_err(|error: T::Err| ConfigError::InvalidValue {
                key: key.to_string(),
                message: error.to_string(),
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_config_targets_binlist_and_others_bucket() {
        let config = AppConfig::default();

        assert_eq!(config.app_host, "0.0.0.0");
        assert_eq!(config.app_port, 8080);
        assert_eq!(config.binlist_url, "https://lookup.binlist.net");
        assert_eq!(config.fallback_country, "OTHERS");
    }

    #[rstest]
    fn config_error_display_names_the_key() {
        let error = ConfigError::InvalidValue {
            key: "APP_PORT".to_string(),
            message: "invalid digit found in string".to_string(),
        };

        assert_eq!(
            format!("{error}"),
            "Invalid value for APP_PORT: invalid digit found in string"
        );
    }

    #[rstest]
    fn config_clone_and_equality() {
        let config = AppConfig::default();
        let cloned = config.clone();

        assert_eq!(config, cloned);
    }

    // Note: AppConfig::from_env tests are omitted because they would require
    // unsafe env::set_var/remove_var in Rust 2024 edition.
}
