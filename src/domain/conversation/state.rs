//! Per-chat conversation state.

use crate::domain::search::SearchFilter;

use super::ConversationStep;

/// The step a chat is on, together with the filter collected so far.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConversationState {
    #[default]
    Idle,
    AwaitingCity(SearchFilter),
    AwaitingMinPrice(SearchFilter),
    AwaitingMaxPrice(SearchFilter),
    AwaitingMinDistance(SearchFilter),
    AwaitingMaxDistance(SearchFilter),
    AwaitingHotelCount(SearchFilter),
}

impl ConversationState {
    pub fn step(&self) -> ConversationStep {
        match self {
            ConversationState::Idle => ConversationStep::Idle,
            ConversationState::AwaitingCity(_) => ConversationStep::AwaitingCity,
            ConversationState::AwaitingMinPrice(_) => ConversationStep::AwaitingMinPrice,
            ConversationState::AwaitingMaxPrice(_) => ConversationStep::AwaitingMaxPrice,
            ConversationState::AwaitingMinDistance(_) => ConversationStep::AwaitingMinDistance,
            ConversationState::AwaitingMaxDistance(_) => ConversationStep::AwaitingMaxDistance,
            ConversationState::AwaitingHotelCount(_) => ConversationStep::AwaitingHotelCount,
        }
    }

    /// The in-progress filter, if a search is being collected.
    pub fn filter(&self) -> Option<&SearchFilter> {
        match self {
            ConversationState::Idle => None,
            ConversationState::AwaitingCity(filter)
            | ConversationState::AwaitingMinPrice(filter)
            | ConversationState::AwaitingMaxPrice(filter)
            | ConversationState::AwaitingMinDistance(filter)
            | ConversationState::AwaitingMaxDistance(filter)
            | ConversationState::AwaitingHotelCount(filter) => Some(filter),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ConversationState::Idle)
    }
}
