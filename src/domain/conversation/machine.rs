//! Pure transition functions for the search dialogue.
//!
//! Each function takes the current state plus an input and returns the next
//! state, the replies to send, and at most one [`Effect`] that needs a remote
//! call. The application layer runs the effect and feeds its outcome back
//! through [`on_city_resolved`] or [`on_search_finished`].

use crate::domain::foundation::{parse_decimal, parse_whole_number};
use crate::domain::search::{CityLookup, CountAdjustment, HotelCount, SearchFilter, SearchMode};

use super::replies::{self, Reply};
use super::{ConversationState, InboundText};

/// Marker for a remote call that failed; details are logged by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteFailure;

/// Remote work a transition asks the caller to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ResolveCity { query: String },
    RunSearch { filter: SearchFilter },
}

/// Result of applying one input to a conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub next: ConversationState,
    pub replies: Vec<Reply>,
    pub effect: Option<Effect>,
}

impl Transition {
    fn to(next: ConversationState) -> Self {
        Self {
            next,
            replies: Vec::new(),
            effect: None,
        }
    }

    fn say(mut self, text: impl Into<String>) -> Self {
        self.replies.push(Reply::plain(text));
        self
    }

    fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }
}

/// Applies an inbound text message to the chat's current state.
///
/// Search commands always restart the dialogue. Any other text goes to
/// whichever step is waiting.
pub fn on_text(state: ConversationState, text: &str) -> Transition {
    let inbound = InboundText::classify(text);
    if let Some(mode) = inbound.search_mode() {
        return start_search(mode);
    }

    match state {
        ConversationState::Idle => on_idle(inbound),
        ConversationState::AwaitingCity(filter) => on_city(filter, text),
        ConversationState::AwaitingMinPrice(filter) => on_min_price(filter, text),
        ConversationState::AwaitingMaxPrice(filter) => on_max_price(filter, text),
        ConversationState::AwaitingMinDistance(filter) => on_min_distance(filter, text),
        ConversationState::AwaitingMaxDistance(filter) => on_max_distance(filter, text),
        ConversationState::AwaitingHotelCount(filter) => on_hotel_count(filter, text),
    }
}

/// Applies the outcome of a city lookup requested by [`Effect::ResolveCity`].
pub fn on_city_resolved(
    state: ConversationState,
    outcome: Result<CityLookup, RemoteFailure>,
) -> Transition {
    let mut filter = match state {
        ConversationState::AwaitingCity(filter) => filter,
        other => return Transition::to(other),
    };

    match outcome {
        Err(RemoteFailure) => {
            Transition::to(ConversationState::AwaitingCity(filter)).say(replies::GENERIC_FAILURE)
        }
        Ok(CityLookup::NotFound) => {
            Transition::to(ConversationState::AwaitingCity(filter)).say(replies::CITY_NOT_FOUND)
        }
        Ok(CityLookup::Found {
            location_id,
            canonical_name,
        }) => {
            filter.set_location(location_id, canonical_name);
            if filter.mode().uses_ranges() {
                Transition::to(ConversationState::AwaitingMinPrice(filter))
                    .say(replies::ASK_MIN_PRICE)
            } else {
                Transition::to(ConversationState::AwaitingHotelCount(filter))
                    .say(replies::ASK_HOTEL_COUNT)
            }
        }
    }
}

/// Applies the outcome of a search requested by [`Effect::RunSearch`].
///
/// The chat is idle afterwards whatever the outcome.
pub fn on_search_finished(outcome: Result<String, RemoteFailure>) -> Transition {
    let idle = Transition::to(ConversationState::Idle);
    match outcome {
        Err(RemoteFailure) => idle.say(replies::GENERIC_FAILURE),
        Ok(text) if text.is_empty() => idle.say(replies::NOTHING_FOUND),
        Ok(text) => Transition {
            replies: vec![Reply::markdown(text)],
            ..idle
        },
    }
}

fn start_search(mode: SearchMode) -> Transition {
    Transition::to(ConversationState::AwaitingCity(SearchFilter::new(mode))).say(replies::ASK_CITY)
}

fn on_idle(inbound: InboundText<'_>) -> Transition {
    use super::Command;

    let idle = Transition::to(ConversationState::Idle);
    match inbound {
        InboundText::Greeting => idle.say(replies::greeting()),
        InboundText::Command(Command::Start) => idle.say(replies::start()),
        InboundText::Command(Command::Help) => idle.say(replies::help()),
        // Search commands are handled before dispatching on state.
        InboundText::Command(Command::Search(mode)) => start_search(mode),
        InboundText::Other(_) => idle.say(replies::unknown()),
    }
}

fn on_city(filter: SearchFilter, text: &str) -> Transition {
    let query = text.trim();
    if query.is_empty() {
        return Transition::to(ConversationState::AwaitingCity(filter)).say(replies::CITY_NOT_FOUND);
    }
    Transition::to(ConversationState::AwaitingCity(filter)).with_effect(Effect::ResolveCity {
        query: query.to_string(),
    })
}

fn on_min_price(mut filter: SearchFilter, text: &str) -> Transition {
    match parse_whole_number("min_price", text) {
        Ok(value) => {
            filter.set_min_price(value);
            Transition::to(ConversationState::AwaitingMaxPrice(filter)).say(replies::ASK_MAX_PRICE)
        }
        Err(_) => Transition::to(ConversationState::AwaitingMinPrice(filter))
            .say(replies::INVALID_MIN_PRICE),
    }
}

fn on_max_price(mut filter: SearchFilter, text: &str) -> Transition {
    match parse_whole_number("max_price", text) {
        Ok(value) => {
            filter.set_max_price(value);
            Transition::to(ConversationState::AwaitingMinDistance(filter))
                .say(replies::ASK_MIN_DISTANCE)
        }
        Err(_) => Transition::to(ConversationState::AwaitingMaxPrice(filter))
            .say(replies::INVALID_MAX_PRICE),
    }
}

fn on_min_distance(mut filter: SearchFilter, text: &str) -> Transition {
    match parse_decimal("min_distance", text) {
        Ok(value) => {
            filter.set_min_distance(value);
            Transition::to(ConversationState::AwaitingMaxDistance(filter))
                .say(replies::ASK_MAX_DISTANCE)
        }
        Err(_) => Transition::to(ConversationState::AwaitingMinDistance(filter))
            .say(replies::INVALID_MIN_DISTANCE),
    }
}

fn on_max_distance(mut filter: SearchFilter, text: &str) -> Transition {
    match parse_decimal("max_distance", text) {
        Ok(value) => {
            filter.set_max_distance(value);
            Transition::to(ConversationState::AwaitingHotelCount(filter))
                .say(replies::ASK_HOTEL_COUNT)
        }
        Err(_) => Transition::to(ConversationState::AwaitingMaxDistance(filter))
            .say(replies::INVALID_MAX_DISTANCE),
    }
}

// Unlike the earlier steps, an unreadable count does not block: the search
// runs with the maximum.
fn on_hotel_count(mut filter: SearchFilter, text: &str) -> Transition {
    let mut transition = Transition::to(ConversationState::Idle);
    let count = match parse_whole_number("hotel_count", text) {
        Ok(requested) => {
            let (count, adjustment) = HotelCount::from_requested(requested);
            match adjustment {
                CountAdjustment::Unchanged => {}
                CountAdjustment::LoweredToMaximum => {
                    transition = transition.say(replies::too_many_hotels())
                }
                CountAdjustment::RaisedToMinimum => {
                    transition = transition.say(replies::too_few_hotels())
                }
            }
            count
        }
        Err(_) => {
            transition = transition.say(replies::invalid_hotel_count());
            HotelCount::maximum()
        }
    };
    filter.set_hotel_count(count);
    transition.with_effect(Effect::RunSearch { filter })
}
