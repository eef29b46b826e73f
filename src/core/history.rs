//! Records of committed transitions.
//!
//! The engine keeps only the most recent record, so tracking history costs
//! a fixed amount of memory regardless of how long the machine runs.

use super::state::{EventId, StateId};
use serde::{Deserialize, Serialize};

/// What caused a transition to be committed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionCause {
    /// Explicit call to `transition_to`
    Direct,
    /// A matching transition for this event
    Event(EventId),
    /// The source state's timeout elapsed
    Timeout,
    /// `reset` returned the machine to its initial state
    Reset,
}

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use autostate::core::{EventId, StateId, TransitionCause, TransitionRecord};
///
/// let record = TransitionRecord {
///     from: Some(StateId(1)),
///     to: StateId(2),
///     at_ms: 1_500,
///     cause: TransitionCause::Event(EventId(10)),
/// };
///
/// assert!(!record.is_self_transition());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state left, or `None` if no state was active
    pub from: Option<StateId>,
    /// The state entered
    pub to: StateId,
    /// Clock reading when the new state was entered
    pub at_ms: u64,
    pub cause: TransitionCause,
}

impl TransitionRecord {
    /// A transition that re-entered the state it left.
    pub fn is_self_transition(&self) -> bool {
        self.from == Some(self.to)
    }
}
