//! Chat Messenger Port - delivers replies to a chat.

use async_trait::async_trait;

use crate::domain::conversation::Reply;
use crate::domain::foundation::ChatId;

/// Errors delivering an outgoing message
#[derive(Debug, Clone, thiserror::Error)]
pub enum MessengerError {
    #[error("Delivery to chat {chat} failed: {reason}")]
    Delivery { chat: ChatId, reason: String },
}

/// Port for sending replies over the messaging transport.
#[async_trait]
pub trait ChatMessenger: Send + Sync {
    async fn send(&self, chat: ChatId, reply: &Reply) -> Result<(), MessengerError>;
}
