//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `HOTEL_BOT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use hotel_search_bot::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Searching via {}", config.hotels.api_host);
//! ```

mod error;
mod hotels;
mod logging;
mod telegram;

pub use error::{ConfigError, ValidationError};
pub use hotels::HotelsConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use telegram::TelegramConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Telegram bot credentials
    pub telegram: TelegramConfig,

    /// Hotel API credentials and request settings
    pub hotels: HotelsConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `HOTEL_BOT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `HOTEL_BOT__TELEGRAM__BOT_TOKEN=...` -> `telegram.bot_token = ...`
    /// - `HOTEL_BOT__HOTELS__TIMEOUT_SECS=10` -> `hotels.timeout_secs = 10`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("HOTEL_BOT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.telegram.validate()?;
        self.hotels.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 7] = [
        "HOTEL_BOT__TELEGRAM__BOT_TOKEN",
        "HOTEL_BOT__HOTELS__API_KEY",
        "HOTEL_BOT__HOTELS__API_HOST",
        "HOTEL_BOT__HOTELS__TIMEOUT_SECS",
        "HOTEL_BOT__HOTELS__CURRENCY",
        "HOTEL_BOT__LOGGING__FORMAT",
        "HOTEL_BOT__LOGGING__FILTER",
    ];

    fn set_minimal_env() {
        env::set_var("HOTEL_BOT__TELEGRAM__BOT_TOKEN", "123456:test-token");
        env::set_var("HOTEL_BOT__HOTELS__API_KEY", "rapid-key");
        env::set_var("HOTEL_BOT__HOTELS__API_HOST", "hotels4.p.rapidapi.com");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.telegram.token(), "123456:test-token");
        assert_eq!(config.hotels.api_host, "hotels4.p.rapidapi.com");
        assert_eq!(config.hotels.currency, "RUB");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_token_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("HOTEL_BOT__HOTELS__API_KEY", "rapid-key");
        env::set_var("HOTEL_BOT__HOTELS__API_HOST", "hotels4.p.rapidapi.com");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("HOTEL_BOT__HOTELS__TIMEOUT_SECS", "10");
        env::set_var("HOTEL_BOT__HOTELS__CURRENCY", "EUR");
        env::set_var("HOTEL_BOT__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.hotels.timeout_secs, 10);
        assert_eq!(config.hotels.currency, "EUR");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_timeout_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("HOTEL_BOT__HOTELS__TIMEOUT_SECS", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
    }
}
