//! State machine trait for step enums.
//!
//! Gives a single place to declare which moves between conversation steps
//! are legal, independent of the data each step carries.

use super::ValidationError;

/// Trait for fieldless enums that represent the steps of a state machine.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for ConversationStep {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         self.valid_transitions().contains(target)
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Idle => vec![Idle, AwaitingCity],
///             // ... etc
///         }
///     }
/// }
///
/// let next = ConversationStep::Idle.transition_to(ConversationStep::AwaitingCity)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if moving from self to target is allowed.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns every step reachable from the current one in a single move.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs the move with validation, returning an error if it is illegal.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "conversation_step",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }
}
