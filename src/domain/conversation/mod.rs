//! Conversation module - the per-chat dialogue that collects a search.
//!
//! # Module Organization
//!
//! - `step` - Fieldless step enum and its legal transitions
//! - `state` - Step plus the filter collected so far
//! - `command` - Classification of inbound text
//! - `replies` - Outgoing message type and fixed texts
//! - `machine` - Pure transition functions

mod command;
pub mod machine;
pub mod replies;
mod state;
mod step;

pub use command::{Command, InboundText, GREETINGS};
pub use machine::{on_city_resolved, on_search_finished, on_text, Effect, RemoteFailure, Transition};
pub use replies::{Reply, ReplyFormat};
pub use state::ConversationState;
pub use step::ConversationStep;
