//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `hotels_api` - Hotel directory and listing search over HTTP
//! - `storage` - Per-chat conversation state
//! - `telegram` - Chat transport
//! - `mock` - Test doubles for all of the above

pub mod hotels_api;
pub mod mock;
pub mod storage;
pub mod telegram;

pub use hotels_api::{HotelsApiClient, HotelsApiConfig};
pub use storage::InMemorySessionStore;
pub use telegram::{run_polling, TelegramMessenger};
