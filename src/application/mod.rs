//! Application layer - Handlers.
//!
//! This layer drives domain transitions and coordinates between ports.

pub mod handlers;

pub use handlers::{
    ConversationError, ConversationHandler, ListingAggregator, SearchError, DEFAULT_MAX_PAGES,
};
