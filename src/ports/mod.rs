//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Remote API Ports
//!
//! - `LocationDirectory` - Resolves a city name to a location id
//! - `ListingSource` - Fetches one page of hotel listings
//!
//! ## Conversation Ports
//!
//! - `SessionStore` - Per-chat conversation state
//! - `ChatMessenger` - Outbound message delivery

mod api_error;
mod chat_messenger;
mod listing_source;
mod location_directory;
mod session_store;

pub use api_error::ApiError;
pub use chat_messenger::{ChatMessenger, MessengerError};
pub use listing_source::ListingSource;
pub use location_directory::LocationDirectory;
pub use session_store::{SessionStore, SessionStoreError};
