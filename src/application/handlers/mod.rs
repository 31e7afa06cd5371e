//! Application handlers.
//!
//! Orchestrate the pure conversation core and the ports.

mod conversation_handler;
mod listing_aggregator;

pub use conversation_handler::{ConversationError, ConversationHandler};
pub use listing_aggregator::{ListingAggregator, SearchError, DEFAULT_MAX_PAGES};
