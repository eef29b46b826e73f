//! Bounded table of guarded transitions.

use crate::core::{EventId, StateId, TransitionDef};
use crate::registry::error::{EngineError, Table};
use crate::registry::states::StateRegistry;

/// Fixed-capacity collection of transitions, in insertion order.
///
/// Insertion order is the tie-break between transitions that share a
/// `(from, event)` pair, so the table is append-only.
pub struct TransitionRegistry<Ctx, const M: usize> {
    slots: [Option<TransitionDef<Ctx>>; M],
    len: usize,
}

impl<Ctx, const M: usize> TransitionRegistry<Ctx, M> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            len: 0,
        }
    }

    /// Append a transition whose endpoints exist in `states`.
    pub fn add<const N: usize>(
        &mut self,
        transition: TransitionDef<Ctx>,
        states: &StateRegistry<Ctx, N>,
    ) -> Result<(), EngineError> {
        if self.len >= M {
            return Err(EngineError::CapacityExceeded {
                table: Table::Transitions,
                capacity: M,
            });
        }
        if !states.contains(transition.from) || !states.contains(transition.to) {
            return Err(EngineError::InvalidReference {
                from: transition.from,
                to: transition.to,
            });
        }

        self.slots[self.len] = Some(transition);
        self.len += 1;
        Ok(())
    }

    /// Transitions leaving `from` on `event`, in insertion order.
    ///
    /// Guards are not evaluated here; callers stop at the first one that
    /// permits.
    pub fn candidates(
        &self,
        from: StateId,
        event: EventId,
    ) -> impl Iterator<Item = &TransitionDef<Ctx>> {
        self.iter().filter(move |t| t.matches(from, event))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransitionDef<Ctx>> {
        self.slots[..self.len].iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        M
    }
}

impl<Ctx, const M: usize> Default for TransitionRegistry<Ctx, M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateDef;

    fn idle(_: &mut ()) {}

    fn states() -> StateRegistry<(), 3> {
        let mut states = StateRegistry::new();
        for id in 1..=3 {
            states.add(StateDef::new(StateId(id)).action(idle)).unwrap();
        }
        states
    }

    #[test]
    fn add_requires_known_endpoints() {
        let states = states();
        let mut transitions: TransitionRegistry<(), 4> = TransitionRegistry::new();

        let unknown_target = transitions.add(
            TransitionDef::new(StateId(1), EventId(10), StateId(9)),
            &states,
        );
        let unknown_source = transitions.add(
            TransitionDef::new(StateId(9), EventId(10), StateId(1)),
            &states,
        );

        assert_eq!(
            unknown_target,
            Err(EngineError::InvalidReference {
                from: StateId(1),
                to: StateId(9)
            })
        );
        assert!(unknown_source.is_err());
        assert!(transitions.is_empty());
    }

    #[test]
    fn capacity_is_enforced() {
        let states = states();
        let mut transitions: TransitionRegistry<(), 1> = TransitionRegistry::new();
        transitions
            .add(TransitionDef::new(StateId(1), EventId(10), StateId(2)), &states)
            .unwrap();

        let result = transitions.add(TransitionDef::new(StateId(2), EventId(10), StateId(3)), &states);

        assert_eq!(
            result,
            Err(EngineError::CapacityExceeded {
                table: Table::Transitions,
                capacity: 1
            })
        );
        assert_eq!(transitions.len(), 1);
    }

    #[test]
    fn candidates_preserve_insertion_order() {
        let states = states();
        let mut transitions: TransitionRegistry<(), 4> = TransitionRegistry::new();
        transitions
            .add(TransitionDef::new(StateId(1), EventId(10), StateId(3)), &states)
            .unwrap();
        transitions
            .add(TransitionDef::new(StateId(2), EventId(10), StateId(1)), &states)
            .unwrap();
        transitions
            .add(TransitionDef::new(StateId(1), EventId(10), StateId(2)), &states)
            .unwrap();
        transitions
            .add(TransitionDef::new(StateId(1), EventId(11), StateId(1)), &states)
            .unwrap();

        let targets: Vec<_> = transitions
            .candidates(StateId(1), EventId(10))
            .map(|t| t.to)
            .collect();

        assert_eq!(targets, vec![StateId(3), StateId(2)]);
    }
}
