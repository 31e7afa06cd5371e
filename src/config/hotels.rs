//! Hotel API configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::HotelsApiConfig;
use crate::application::DEFAULT_MAX_PAGES;

/// Hotel API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HotelsConfig {
    /// API key sent with every request
    pub api_key: Secret<String>,

    /// API host, e.g. `hotels4.p.rapidapi.com`
    pub api_host: String,

    /// Overrides `https://{api_host}`
    pub base_url: Option<String>,

    /// Response language
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Currency prices are requested and shown in
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Most pages requested for one search
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
}

impl HotelsConfig {
    pub fn new(api_key: impl Into<String>, api_host: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            api_host: api_host.into(),
            base_url: None,
            locale: default_locale(),
            currency: default_currency(),
            timeout_secs: default_timeout(),
            max_pages: default_max_pages(),
        }
    }

    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Builds the HTTP client configuration.
    pub fn client_config(&self) -> HotelsApiConfig {
        let config = HotelsApiConfig::new(self.api_key.expose_secret().clone(), &self.api_host)
            .with_locale(&self.locale)
            .with_currency(&self.currency)
            .with_timeout(self.timeout());

        match &self.base_url {
            Some(url) => config.with_base_url(url),
            None => config,
        }
    }

    /// Validate hotel API configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("HOTELS__API_KEY"));
        }

        if self.api_host.is_empty() {
            return Err(ValidationError::MissingRequired("HOTELS__API_HOST"));
        }

        if self.api_host.contains("://") || self.api_host.contains('/') {
            return Err(ValidationError::InvalidApiHost);
        }

        if let Some(url) = &self.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidBaseUrl);
            }
        }

        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }

        if self.max_pages == 0 {
            return Err(ValidationError::InvalidMaxPages);
        }

        Ok(())
    }
}

fn default_locale() -> String {
    "ru_RU".to_string()
}

fn default_currency() -> String {
    "RUB".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_pages() -> u32 {
    DEFAULT_MAX_PAGES
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> HotelsConfig {
        HotelsConfig::new("key", "hotels4.p.rapidapi.com")
    }

    #[test]
    fn test_defaults() {
        let config = valid();
        assert_eq!(config.locale, "ru_RU");
        assert_eq!(config.currency, "RUB");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.max_pages, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_client_config_uses_host_as_base_url() {
        let client = valid().client_config();
        assert_eq!(client.base_url, "https://hotels4.p.rapidapi.com");
        assert_eq!(client.api_host, "hotels4.p.rapidapi.com");
    }

    #[test]
    fn test_client_config_honours_overrides() {
        let config = HotelsConfig {
            base_url: Some("http://localhost:9000/".to_string()),
            currency: "EUR".to_string(),
            timeout_secs: 5,
            ..valid()
        };
        let client = config.client_config();
        assert_eq!(client.base_url, "http://localhost:9000");
        assert_eq!(client.currency, "EUR");
        assert_eq!(client.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_missing_credentials() {
        let config = HotelsConfig::new("", "host");
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("HOTELS__API_KEY"))
        );

        let config = HotelsConfig::new("key", "");
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("HOTELS__API_HOST"))
        );
    }

    #[test]
    fn test_host_with_scheme_rejected() {
        let config = HotelsConfig::new("key", "https://hotels4.p.rapidapi.com");
        assert_eq!(config.validate(), Err(ValidationError::InvalidApiHost));
    }

    #[test]
    fn test_timeout_bounds() {
        for timeout_secs in [0, 301] {
            let config = HotelsConfig {
                timeout_secs,
                ..valid()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
        }
    }

    #[test]
    fn test_zero_max_pages_rejected() {
        let config = HotelsConfig {
            max_pages: 0,
            ..valid()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMaxPages));
    }
}
