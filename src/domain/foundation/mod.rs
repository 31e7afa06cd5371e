//! Foundation module - Shared domain primitives.
//!
//! Identifiers, user-input parsing, the state machine trait and the
//! validation error they share.

mod errors;
mod ids;
mod numbers;
mod state_machine;

pub use errors::ValidationError;
pub use ids::{ChatId, LocationId};
pub use numbers::{parse_decimal, parse_whole_number};
pub use state_machine::StateMachine;
