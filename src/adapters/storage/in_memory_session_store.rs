//! In-Memory Session Store Adapter
//!
//! Keeps each chat's conversation state in a map for the lifetime of the
//! process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::ConversationState;
use crate::domain::foundation::ChatId;
use crate::ports::{SessionStore, SessionStoreError};

/// In-memory storage for per-chat conversation state
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<ChatId, ConversationState>>>,
}

impl InMemorySessionStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of chats with an entry, idle or not
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, chat: ChatId) -> Result<ConversationState, SessionStoreError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(&chat).cloned().unwrap_or_default())
    }

    async fn save(&self, chat: ChatId, state: ConversationState) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(chat, state);
        Ok(())
    }

    async fn active_count(&self) -> Result<usize, SessionStoreError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.values().filter(|state| !state.is_idle()).count())
    }
}
