//! Session Store Port - per-chat conversation state.
//!
//! One entry per chat. A new search command overwrites the entry; nothing
//! removes it otherwise.

use async_trait::async_trait;

use crate::domain::conversation::ConversationState;
use crate::domain::foundation::ChatId;

/// Errors that can occur during session store operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session store unavailable: {0}")]
    Unavailable(String),
}

/// Port for loading and saving conversation state by chat.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Loads the chat's state, or `ConversationState::Idle` if it has none.
    async fn load(&self, chat: ChatId) -> Result<ConversationState, SessionStoreError>;

    /// Replaces the chat's state.
    async fn save(&self, chat: ChatId, state: ConversationState) -> Result<(), SessionStoreError>;

    /// Number of chats currently in the middle of a dialogue.
    async fn active_count(&self) -> Result<usize, SessionStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_error_displays_reason() {
        let err = SessionStoreError::Unavailable("lock poisoned".to_string());
        assert_eq!(err.to_string(), "Session store unavailable: lock poisoned");
    }
}
