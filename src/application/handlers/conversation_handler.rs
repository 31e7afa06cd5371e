//! ConversationHandler - applies one inbound text message to a chat.
//!
//! Loads the chat's state, runs the pure transition, performs any remote
//! call the transition asks for, delivers replies in order and stores the
//! resulting state.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::conversation::{
    on_city_resolved, on_search_finished, on_text, ConversationState, ConversationStep, Effect,
    RemoteFailure, Reply, Transition,
};
use crate::domain::foundation::{ChatId, StateMachine};
use crate::domain::search::CityLookup;
use crate::ports::{ChatMessenger, LocationDirectory, SessionStore, SessionStoreError};

use super::ListingAggregator;

/// Errors that stop a message from being handled.
///
/// Remote API and delivery failures are not among them: the former become
/// chat replies and the latter are logged.
#[derive(Debug, Error)]
pub enum ConversationError {
    #[error(transparent)]
    Session(#[from] SessionStoreError),
}

/// Handler driving every chat's dialogue.
pub struct ConversationHandler {
    sessions: Arc<dyn SessionStore>,
    directory: Arc<dyn LocationDirectory>,
    aggregator: Arc<ListingAggregator>,
    messenger: Arc<dyn ChatMessenger>,
}

impl ConversationHandler {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        directory: Arc<dyn LocationDirectory>,
        aggregator: Arc<ListingAggregator>,
        messenger: Arc<dyn ChatMessenger>,
    ) -> Self {
        Self {
            sessions,
            directory,
            aggregator,
            messenger,
        }
    }

    #[tracing::instrument(skip_all, fields(chat = %chat))]
    pub async fn handle_text(&self, chat: ChatId, text: &str) -> Result<(), ConversationError> {
        let state = self.sessions.load(chat).await?;
        tracing::debug!(step = ?state.step(), "Handling message");

        let mut current = state.step();
        let mut transition = on_text(state, text);

        loop {
            check_step(&current, &transition.next);
            current = transition.next.step();
            self.deliver(chat, &transition.replies).await;

            let Transition { next, effect, .. } = transition;
            transition = match effect {
                None => {
                    self.sessions.save(chat, next).await?;
                    self.log_active_chats().await;
                    return Ok(());
                }
                Some(Effect::ResolveCity { query }) => {
                    on_city_resolved(next, self.resolve_city(&query).await)
                }
                Some(Effect::RunSearch { filter }) => {
                    // The chat is idle while the search runs.
                    self.sessions.save(chat, next).await?;
                    let outcome = match self.aggregator.collect(&filter).await {
                        Ok(text) => Ok(text),
                        Err(e) => {
                            tracing::warn!(error = %e, "Search failed");
                            Err(RemoteFailure)
                        }
                    };
                    on_search_finished(outcome)
                }
            };
        }
    }

    async fn log_active_chats(&self) {
        match self.sessions.active_count().await {
            Ok(active) => tracing::debug!(active, "Chats mid-dialogue"),
            Err(e) => tracing::warn!(error = %e, "Could not count active chats"),
        }
    }

    async fn resolve_city(&self, query: &str) -> Result<CityLookup, RemoteFailure> {
        self.directory.resolve_city(query).await.map_err(|e| {
            tracing::warn!(error = %e, query, "City lookup failed");
            RemoteFailure
        })
    }

    async fn deliver(&self, chat: ChatId, replies: &[Reply]) {
        for reply in replies {
            if let Err(e) = self.messenger.send(chat, reply).await {
                tracing::error!(error = %e, "Failed to deliver reply");
            }
        }
    }
}

fn check_step(from: &ConversationStep, to: &ConversationState) {
    if let Err(e) = from.transition_to(to.step()) {
        tracing::error!(error = %e, "Conversation moved to an unexpected step");
    }
}
