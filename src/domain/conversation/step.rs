//! Conversation steps and the legal moves between them.

use crate::domain::foundation::StateMachine;

/// Which answer a chat is currently waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversationStep {
    Idle,
    AwaitingCity,
    AwaitingMinPrice,
    AwaitingMaxPrice,
    AwaitingMinDistance,
    AwaitingMaxDistance,
    AwaitingHotelCount,
}

impl ConversationStep {
    pub fn is_idle(&self) -> bool {
        matches!(self, ConversationStep::Idle)
    }
}

impl StateMachine for ConversationStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    // Every step may loop on itself (failed validation) and every step may
    // restart at AwaitingCity (new search command). The hotel count is the
    // one step that never repeats.
    fn valid_transitions(&self) -> Vec<Self> {
        use ConversationStep::*;
        match self {
            Idle => vec![Idle, AwaitingCity],
            AwaitingCity => vec![AwaitingCity, AwaitingMinPrice, AwaitingHotelCount],
            AwaitingMinPrice => vec![AwaitingMinPrice, AwaitingMaxPrice, AwaitingCity],
            AwaitingMaxPrice => vec![AwaitingMaxPrice, AwaitingMinDistance, AwaitingCity],
            AwaitingMinDistance => vec![AwaitingMinDistance, AwaitingMaxDistance, AwaitingCity],
            AwaitingMaxDistance => vec![AwaitingMaxDistance, AwaitingHotelCount, AwaitingCity],
            AwaitingHotelCount => vec![Idle, AwaitingCity],
        }
    }
}
