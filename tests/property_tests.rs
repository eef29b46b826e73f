//! Property-based tests for the state and transition tables.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use autostate::core::{EventId, StateDef, StateId, TransitionDef};
use autostate::engine::{Engine, ManualClock};
use proptest::prelude::*;
use std::time::Duration;

#[derive(Default)]
struct Flags {
    open: [bool; 4],
}

fn noop(_: &mut Flags) {}

fn open0(f: &Flags) -> bool {
    f.open[0]
}

fn open1(f: &Flags) -> bool {
    f.open[1]
}

fn open2(f: &Flags) -> bool {
    f.open[2]
}

fn open3(f: &Flags) -> bool {
    f.open[3]
}

// Indexed by slot so generated transitions can be gated independently.
const GUARDS: [fn(&Flags) -> bool; 4] = [open0, open1, open2, open3];

type Machine = Engine<'static, Flags, ManualClock, 4, 8>;

fn machine(clock: ManualClock) -> Machine {
    let mut engine = Engine::new(Flags::default(), clock);
    for id in 0..4 {
        engine.add_state(StateDef::new(StateId(id)).action(noop)).unwrap();
    }
    engine
}

prop_compose! {
    fn arbitrary_state()(raw in 0..4u8) -> StateId {
        StateId(raw)
    }
}

prop_compose! {
    fn arbitrary_edge()(
        from in arbitrary_state(),
        event in 0..3u8,
        to in arbitrary_state(),
        guard in prop::option::of(0..4usize),
    ) -> (StateId, EventId, StateId, Option<usize>) {
        (from, EventId(event), to, guard)
    }
}

proptest! {
    #[test]
    fn state_table_never_exceeds_capacity(ids in prop::collection::vec(any::<u8>(), 0..20)) {
        let mut engine: Engine<'static, Flags, ManualClock, 5, 1> =
            Engine::new(Flags::default(), ManualClock::new(0));

        let mut accepted = Vec::new();
        for raw in ids {
            let id = StateId(raw);
            let result = engine.add_state(StateDef::new(id).action(noop));
            if result.is_ok() {
                prop_assert!(!accepted.contains(&id));
                accepted.push(id);
            }
            prop_assert!(engine.states().len() <= 5);
        }

        let stored: Vec<_> = engine.states().iter().map(|s| s.id()).collect();
        prop_assert_eq!(stored, accepted);
    }

    #[test]
    fn dispatch_takes_first_passing_candidate(
        edges in prop::collection::vec(arbitrary_edge(), 0..8),
        open in prop::array::uniform4(any::<bool>()),
        start in arbitrary_state(),
        event in 0..3u8,
    ) {
        let mut engine = machine(ManualClock::new(0));
        engine.context_mut().open = open;
        for &(from, ev, to, guard) in &edges {
            let mut transition = TransitionDef::new(from, ev, to);
            if let Some(slot) = guard {
                transition = transition.when(GUARDS[slot]);
            }
            engine.add_transition(transition).unwrap();
        }
        engine.set_initial_state(start);

        let expected = edges
            .iter()
            .find(|(from, ev, _, guard)| {
                *from == start && *ev == EventId(event) && guard.is_none_or(|slot| open[slot])
            })
            .map(|(_, _, to, _)| *to);

        let fired = engine.handle_event(EventId(event));

        prop_assert_eq!(fired, expected.is_some());
        prop_assert_eq!(engine.current_state(), Some(expected.unwrap_or(start)));
        prop_assert_eq!(engine.pending_payload(), None);
    }

    #[test]
    fn timeout_fires_exactly_at_deadline(duration in 1..500u64, elapsed in 0..1000u64) {
        let clock = ManualClock::new(0);
        let mut engine = machine(clock.clone());
        engine.set_timeout(StateId(0), Duration::from_millis(duration), StateId(1));
        engine.set_initial_state(StateId(0));

        clock.advance(elapsed);
        engine.update();

        let expected = if elapsed >= duration { StateId(1) } else { StateId(0) };
        prop_assert_eq!(engine.current_state(), Some(expected));
    }

    #[test]
    fn unknown_targets_never_move_the_cursor(start in arbitrary_state(), target in 4..=255u8) {
        let mut engine = machine(ManualClock::new(0));
        engine.set_initial_state(start);

        engine.transition_to(StateId(target));

        prop_assert_eq!(engine.current_state(), Some(start));
        prop_assert_eq!(engine.transitions_taken(), 0);
    }
}
