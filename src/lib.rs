//! Autostate: a fixed-capacity state machine engine for control loops
//!
//! Autostate runs a small set of numbered states, each with an action and
//! optional entry/exit hooks, connected by guarded transitions. Transitions
//! fire explicitly, on discrete events, or when a state has been active
//! longer than its timeout. Tables are fixed-size arrays chosen at compile
//! time, and nothing on the dispatch path allocates or panics.
//!
//! # Core Concepts
//!
//! - **States**: [`StateDef`] pairs a [`StateId`] with an action and hooks
//! - **Transitions**: [`TransitionDef`] edges keyed by [`EventId`], checked
//!   in insertion order and gated by [`Guard`]s
//! - **Engine**: [`Engine`] owns the tables, the current state, a context
//!   handed to every callback, and a [`Clock`] for timeouts
//! - **Debugging**: an optional borrowed [`DebugSink`] receives one line per
//!   event, error and transition
//!
//! # Example
//!
//! ```rust
//! use autostate::{state_ids, Engine, EventId, ManualClock, StateDef, TransitionDef};
//! use std::time::Duration;
//!
//! state_ids! {
//!     enum Door {
//!         Closed = 1,
//!         Open = 2,
//!     }
//! }
//!
//! const PUSH: EventId = EventId(1);
//!
//! #[derive(Default)]
//! struct Ctx {
//!     opened: u32,
//! }
//!
//! let clock = ManualClock::new(0);
//! let mut engine: Engine<'_, Ctx, ManualClock, 2, 1> = Engine::new(Ctx::default(), clock.clone());
//!
//! engine.add_state(StateDef::new(Door::Closed.id()).action(|_: &mut Ctx| {})).unwrap();
//! engine
//!     .add_state(
//!         StateDef::new(Door::Open.id())
//!             .action(|_: &mut Ctx| {})
//!             .on_enter(|ctx: &mut Ctx| ctx.opened += 1),
//!     )
//!     .unwrap();
//! engine.add_transition(TransitionDef::new(Door::Closed.id(), PUSH, Door::Open.id())).unwrap();
//! engine.set_timeout(Door::Open.id(), Duration::from_millis(500), Door::Closed.id());
//! engine.set_initial_state(Door::Closed.id());
//!
//! assert!(engine.handle_event(PUSH));
//! clock.advance(500);
//! engine.update();
//!
//! assert_eq!(engine.current_state(), Some(Door::Closed.id()));
//! assert_eq!(engine.context().opened, 1);
//! ```

pub mod core;
pub mod engine;
mod macros;
pub mod registry;

// Re-export commonly used types
pub use crate::core::{EventId, EventPayload, Guard, StateDef, StateId, TransitionDef, TransitionRecord};
pub use crate::engine::{Clock, DebugSink, Engine, ManualClock, SystemClock, TracingSink};
pub use crate::registry::EngineError;
