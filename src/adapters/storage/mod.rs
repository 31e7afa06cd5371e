//! Storage Adapters
//!
//! Implementations of the SessionStore port.
//!
//! ## Available Adapters
//!
//! - **InMemorySessionStore** - Per-chat state in memory, lost on restart

mod in_memory_session_store;

pub use in_memory_session_store::InMemorySessionStore;
