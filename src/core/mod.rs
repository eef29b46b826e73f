//! Core value types of the state machine.
//!
//! This module contains the building blocks that the registries store and
//! the engine dispatches over:
//! - State identifiers and definitions
//! - Guarded transitions
//! - Guard predicates
//! - Transition records
//!
//! Nothing here allocates. Callbacks are function pointers over an explicit
//! context type chosen by the caller.

mod guard;
mod history;
mod state;
mod transition;

pub use guard::Guard;
pub use history::{TransitionCause, TransitionRecord};
pub use state::{Action, EventId, EventPayload, Hook, StateDef, StateId, Timeout};
pub use transition::TransitionDef;
