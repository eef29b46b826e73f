//! Bounded table of state definitions.

use crate::core::{StateDef, StateId, Timeout};
use crate::registry::error::{EngineError, Table};
use std::time::Duration;

/// Fixed-capacity collection of states, in insertion order.
///
/// Storage is an inline array of `N` slots; lookups are linear scans.
///
/// # Example
///
/// ```rust
/// use autostate::core::{StateDef, StateId};
/// use autostate::registry::StateRegistry;
///
/// let mut states: StateRegistry<(), 2> = StateRegistry::new();
/// states.add(StateDef::new(StateId(1)).action(|_: &mut ()| {})).unwrap();
///
/// assert!(states.contains(StateId(1)));
/// assert_eq!(states.len(), 1);
/// assert_eq!(states.capacity(), 2);
/// ```
pub struct StateRegistry<Ctx, const N: usize> {
    slots: [Option<StateDef<Ctx>>; N],
    len: usize,
}

impl<Ctx, const N: usize> StateRegistry<Ctx, N> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            len: 0,
        }
    }

    /// Append a state.
    ///
    /// Rejected when the table is full, the definition has no action, or
    /// the id is already taken. A definition copied out of another table
    /// loses its timeout; timeouts are attached with
    /// [`set_timeout`](Self::set_timeout).
    pub fn add(&mut self, mut state: StateDef<Ctx>) -> Result<(), EngineError> {
        if self.len >= N {
            return Err(EngineError::CapacityExceeded {
                table: Table::States,
                capacity: N,
            });
        }
        if !state.has_action() {
            return Err(EngineError::MissingAction(state.id()));
        }
        if self.contains(state.id()) {
            return Err(EngineError::DuplicateId(state.id()));
        }

        state.set_timeout(None);
        self.slots[self.len] = Some(state);
        self.len += 1;
        Ok(())
    }

    /// Attach or overwrite the timeout of `id`.
    ///
    /// Returns `false` without touching anything when `id` is unknown. A
    /// zero `duration` removes the timeout.
    pub fn set_timeout(&mut self, id: StateId, duration: Duration, target: StateId) -> bool {
        match self.get_mut(id) {
            Some(state) => {
                state.set_timeout(Timeout::new(duration, target));
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: StateId) -> Option<&StateDef<Ctx>> {
        self.iter().find(|s| s.id() == id)
    }

    fn get_mut(&mut self, id: StateId) -> Option<&mut StateDef<Ctx>> {
        self.slots[..self.len]
            .iter_mut()
            .flatten()
            .find(|s| s.id() == id)
    }

    pub fn contains(&self, id: StateId) -> bool {
        self.get(id).is_some()
    }

    /// States in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &StateDef<Ctx>> {
        self.slots[..self.len].iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        N
    }
}

impl<Ctx, const N: usize> Default for StateRegistry<Ctx, N> {
    fn default() -> Self {
        Self::new()
    }
}
