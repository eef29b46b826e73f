//! Guarded, event-triggered edges between states.

use super::guard::Guard;
use super::state::{EventId, StateId};
use std::fmt;

/// A transition from one state to another, keyed by an event.
///
/// Several transitions may share the same `(from, event)` pair. The one
/// added first whose guard passes is the one taken.
///
/// # Example
///
/// ```rust
/// use autostate::core::{EventId, StateId, TransitionDef};
///
/// struct Door {
///     locked: bool,
/// }
///
/// let open = TransitionDef::new(StateId(1), EventId(3), StateId(2))
///     .when(|door: &Door| !door.locked);
///
/// assert!(open.matches(StateId(1), EventId(3)));
/// assert!(open.permits(&Door { locked: false }));
/// assert!(!open.permits(&Door { locked: true }));
/// ```
pub struct TransitionDef<Ctx> {
    pub from: StateId,
    pub event: EventId,
    pub to: StateId,
    pub guard: Option<Guard<Ctx>>,
}

impl<Ctx> TransitionDef<Ctx> {
    /// Unconditional transition.
    pub fn new(from: StateId, event: EventId, to: StateId) -> Self {
        Self {
            from,
            event,
            to,
            guard: None,
        }
    }

    pub fn guard(mut self, guard: Guard<Ctx>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard from a predicate function.
    pub fn when(self, predicate: fn(&Ctx) -> bool) -> Self {
        self.guard(Guard::new(predicate))
    }

    /// Whether this edge leaves `current` on `event`. Guards are not consulted.
    pub fn matches(&self, current: StateId, event: EventId) -> bool {
        self.from == current && self.event == event
    }

    /// Whether the guard, if any, lets the transition through.
    pub fn permits(&self, ctx: &Ctx) -> bool {
        self.guard.as_ref().is_none_or(|g| g.check(ctx))
    }
}

impl<Ctx> Clone for TransitionDef<Ctx> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Ctx> Copy for TransitionDef<Ctx> {}

impl<Ctx> fmt::Debug for TransitionDef<Ctx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionDef")
            .field("from", &self.from)
            .field("event", &self.event)
            .field("to", &self.to)
            .field("guarded", &self.guard.is_some())
            .finish()
    }
}
