//! Telegram bot configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot token issued by BotFather, `<bot id>:<secret>`
    pub bot_token: Secret<String>,
}

impl TelegramConfig {
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: Secret::new(bot_token.into()),
        }
    }

    /// Exposes the token for building the bot client.
    pub fn token(&self) -> &str {
        self.bot_token.expose_secret()
    }

    /// Validate Telegram configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let token = self.token();
        if token.is_empty() {
            return Err(ValidationError::MissingRequired("TELEGRAM__BOT_TOKEN"));
        }

        match token.split_once(':') {
            Some((id, secret))
                if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) && !secret.is_empty() =>
            {
                Ok(())
            }
            _ => Err(ValidationError::InvalidBotToken),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_token() {
        let config = TelegramConfig::new("123456:ABC-def_ghi");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_token_is_missing() {
        let config = TelegramConfig::new("");
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("TELEGRAM__BOT_TOKEN"))
        );
    }

    #[test]
    fn test_malformed_tokens() {
        for token in ["no-colon", ":secret", "12a4:secret", "12345:"] {
            let config = TelegramConfig::new(token);
            assert_eq!(
                config.validate(),
                Err(ValidationError::InvalidBotToken),
                "{} should be rejected",
                token
            );
        }
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let config = TelegramConfig::new("123456:super-secret");
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
