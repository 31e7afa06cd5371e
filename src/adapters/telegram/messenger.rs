//! Telegram implementation of the ChatMessenger port.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatId as TgChatId, ParseMode};
use teloxide::{ApiError as TgApiError, RequestError};

use crate::domain::conversation::{Reply, ReplyFormat};
use crate::domain::foundation::ChatId;
use crate::domain::search::markdown_to_plain;
use crate::ports::{ChatMessenger, MessengerError};

/// Sends replies through the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    async fn send_once(&self, chat: ChatId, reply: &Reply) -> Result<(), RequestError> {
        let mut request = self
            .bot
            .send_message(TgChatId(chat.as_i64()), reply.text.clone());
        if let Some(mode) = parse_mode(reply.format) {
            request = request.parse_mode(mode);
        }
        request.await.map(|_| ())
    }
}

impl std::fmt::Debug for TelegramMessenger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramMessenger").finish_non_exhaustive()
    }
}

/// Telegram parse mode for a reply format. Plain text sends none.
#[allow(deprecated)]
pub(crate) fn parse_mode(format: ReplyFormat) -> Option<ParseMode> {
    match format {
        ReplyFormat::Plain => None,
        // Listing blocks escape for legacy Markdown, not MarkdownV2.
        ReplyFormat::Markdown => Some(ParseMode::Markdown),
    }
}

/// The plain-text reply to resend when Telegram rejects a reply's markup.
pub(crate) fn plain_fallback(reply: &Reply, error: &RequestError) -> Option<Reply> {
    match (reply.format, error) {
        (ReplyFormat::Markdown, RequestError::Api(TgApiError::CantParseEntities(_))) => {
            Some(Reply::plain(markdown_to_plain(&reply.text)))
        }
        _ => None,
    }
}

#[async_trait]
impl ChatMessenger for TelegramMessenger {
    async fn send(&self, chat: ChatId, reply: &Reply) -> Result<(), MessengerError> {
        let delivery_error = |e: RequestError| MessengerError::Delivery {
            chat,
            reason: e.to_string(),
        };

        match self.send_once(chat, reply).await {
            Ok(()) => Ok(()),
            Err(e) => match plain_fallback(reply, &e) {
                Some(plain) => {
                    tracing::warn!(chat = %chat, error = %e, "Markup rejected, resending as plain text");
                    self.send_once(chat, &plain).await.map_err(delivery_error)
                }
                None => Err(delivery_error(e)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cant_parse() -> RequestError {
        RequestError::Api(TgApiError::CantParseEntities(
            "Bad Request: can't parse entities: Can't find end of the entity".to_string(),
        ))
    }

    #[test]
    #[allow(deprecated)]
    fn markdown_replies_use_legacy_markdown() {
        assert_eq!(parse_mode(ReplyFormat::Markdown), Some(ParseMode::Markdown));
        assert_eq!(parse_mode(ReplyFormat::Plain), None);
    }

    #[test]
    fn rejected_markdown_falls_back_to_plain_text() {
        let reply = Reply::markdown("*Hotel *\\**Star*\\** Inn*\n5 Main St");

        let fallback = plain_fallback(&reply, &cant_parse()).unwrap();

        assert_eq!(fallback, Reply::plain("Hotel *Star* Inn\n5 Main St"));
    }

    #[test]
    fn plain_replies_and_other_errors_are_not_resent() {
        assert!(plain_fallback(&Reply::plain("hi"), &cant_parse()).is_none());

        let blocked = RequestError::Api(TgApiError::BotBlocked);
        assert!(plain_fallback(&Reply::markdown("*hi*"), &blocked).is_none());
    }
}
