//! Recording messenger for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::conversation::Reply;
use crate::domain::foundation::ChatId;
use crate::ports::{ChatMessenger, MessengerError};

/// Messenger that records every reply instead of delivering it.
#[derive(Debug, Clone, Default)]
pub struct RecordingMessenger {
    sent: Arc<Mutex<Vec<(ChatId, Reply)>>>,
    fail: bool,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A messenger whose deliveries all fail (replies are still recorded).
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// All replies sent to `chat`, in order.
    pub fn replies_for(&self, chat: ChatId) -> Vec<Reply> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| *c == chat)
            .map(|(_, reply)| reply.clone())
            .collect()
    }

    /// Texts sent to `chat`, in order.
    pub fn texts_for(&self, chat: ChatId) -> Vec<String> {
        self.replies_for(chat).into_iter().map(|r| r.text).collect()
    }
}

#[async_trait]
impl ChatMessenger for RecordingMessenger {
    async fn send(&self, chat: ChatId, reply: &Reply) -> Result<(), MessengerError> {
        self.sent.lock().unwrap().push((chat, reply.clone()));
        if self.fail {
            return Err(MessengerError::Delivery {
                chat,
                reason: "simulated failure".to_string(),
            });
        }
        Ok(())
    }
}
