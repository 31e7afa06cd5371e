//! Shared HTTP client for the hotel API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HotelsApiConfig::new(api_key, "hotels4.p.rapidapi.com")
//!     .with_locale("ru_RU")
//!     .with_timeout(Duration::from_secs(30));
//!
//! let client = HotelsApiClient::new(config)?;
//! ```

use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::ports::ApiError;

/// Configuration for the hotel API client.
#[derive(Debug, Clone)]
pub struct HotelsApiConfig {
    /// API key sent as `x-rapidapi-key`.
    api_key: Secret<String>,
    /// API host sent as `x-rapidapi-host`.
    pub api_host: String,
    /// Base URL requests are made against (default: `https://{api_host}`).
    pub base_url: String,
    /// Response language.
    pub locale: String,
    /// Currency prices are quoted in.
    pub currency: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HotelsApiConfig {
    /// Creates a new configuration with the given credentials.
    pub fn new(api_key: impl Into<String>, api_host: impl Into<String>) -> Self {
        let api_host = api_host.into();
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: format!("https://{}", api_host),
            api_host,
            locale: "ru_RU".to_string(),
            currency: "RUB".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the response locale.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Sets the price currency.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// HTTP client implementing both hotel API ports.
pub struct HotelsApiClient {
    pub(super) config: HotelsApiConfig,
    client: Client,
}

impl HotelsApiClient {
    /// Creates a client with the given configuration.
    pub fn new(config: HotelsApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Sends one GET request and decodes a successful JSON body.
    ///
    /// Single attempt; no retries.
    pub(super) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        tracing::debug!(path, ?params, "Calling hotel API");

        let response = self
            .client
            .get(self.url(path))
            .header("x-rapidapi-key", self.config.api_key())
            .header("x-rapidapi-host", &self.config.api_host)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    ApiError::network(format!("Connection failed: {}", e))
                } else {
                    ApiError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(path, status = status.as_u16(), "Hotel API returned an error status");
            return Err(ApiError::status(status.as_u16(), body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::hotels_api::test_server::{
        client_for, closed_port, never_respond, respond_with,
    };

    #[test]
    fn config_defaults_follow_host() {
        let config = HotelsApiConfig::new("key", "hotels4.p.rapidapi.com");
        assert_eq!(config.base_url, "https://hotels4.p.rapidapi.com");
        assert_eq!(config.locale, "ru_RU");
        assert_eq!(config.currency, "RUB");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.api_key(), "key");
    }

    #[test]
    fn config_builder_works() {
        let config = HotelsApiConfig::new("key", "host")
            .with_base_url("http://localhost:9000/")
            .with_locale("en_US")
            .with_currency("USD")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.locale, "en_US");
        assert_eq!(config.currency, "USD");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn api_key_is_redacted_in_debug_output() {
        let config = HotelsApiConfig::new("super-secret-key", "host");
        assert!(!format!("{:?}", config).contains("super-secret-key"));
    }

    #[derive(Debug, serde::Deserialize)]
    struct Ping {
        ok: bool,
    }

    #[tokio::test]
    async fn success_body_is_decoded() {
        let base = respond_with("200 OK", r#"{"ok": true}"#).await;
        let ping: Ping = client_for(&base).get_json("/ping", &[]).await.unwrap();
        assert!(ping.ok);
    }

    #[tokio::test]
    async fn error_status_keeps_code_and_body() {
        let base = respond_with("500 Internal Server Error", "upstream down").await;
        let result = client_for(&base).get_json::<Ping>("/ping", &[]).await;
        assert_eq!(result.unwrap_err(), ApiError::status(500, "upstream down"));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let base = respond_with("200 OK", "{not json").await;
        let result = client_for(&base).get_json::<Ping>("/ping", &[]).await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn refused_connection_is_a_network_error() {
        let base = closed_port().await;
        let result = client_for(&base).get_json::<Ping>("/ping", &[]).await;
        assert!(matches!(result, Err(ApiError::Network(_))));
    }

    #[tokio::test]
    async fn silent_server_times_out() {
        let base = never_respond().await;
        let result = client_for(&base).get_json::<Ping>("/ping", &[]).await;
        assert!(matches!(result, Err(ApiError::Timeout { .. })));
    }

    #[test]
    fn urls_join_base_and_path() {
        let client =
            HotelsApiClient::new(HotelsApiConfig::new("key", "host").with_base_url("http://api"))
                .unwrap();
        assert_eq!(client.url("/locations/search"), "http://api/locations/search");
    }
}
