//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, number parsing, errors, state machine)
//! - `search` - Search modes, filters, listings and city lookups
//! - `conversation` - Per-chat dialogue states and pure transitions

pub mod conversation;
pub mod foundation;
pub mod search;
