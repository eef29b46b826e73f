//! State identifiers and state definitions.
//!
//! A state is a numbered slot in the machine with one required action and
//! optional entry/exit hooks. All callbacks are plain function pointers over
//! a caller-chosen context type, so defining states never allocates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Identifier of a state within a machine.
///
/// The whole `u8` range is available. An engine with no active state
/// reports `None` rather than reserving one of these values.
///
/// # Example
///
/// ```rust
/// use autostate::core::StateId;
///
/// let idle = StateId(1);
/// assert_eq!(idle.get(), 1);
/// assert_eq!(idle.to_string(), "1");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(pub u8);

impl StateId {
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<u8> for StateId {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

impl From<StateId> for u8 {
    fn from(id: StateId) -> Self {
        id.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a discrete event fed to [`Engine::handle_event`].
///
/// [`Engine::handle_event`]: crate::engine::Engine::handle_event
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u8);

impl EventId {
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<u8> for EventId {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

impl From<EventId> for u8 {
    fn from(id: EventId) -> Self {
        id.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque word attached to an event.
///
/// The engine holds it only while the event is being dispatched and never
/// hands it to guards or actions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct EventPayload(pub u32);

/// Per-tick state action.
pub type Action<Ctx> = fn(&mut Ctx);

/// Entry or exit hook. Same shape as [`Action`].
pub type Hook<Ctx> = fn(&mut Ctx);

/// Automatic transition taken once a state has been active long enough.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Timeout {
    /// How long the state may stay active
    pub duration: Duration,
    /// Where the engine goes once `duration` has elapsed
    pub target: StateId,
}

impl Timeout {
    /// Build a timeout, or `None` when `duration` is zero.
    pub fn new(duration: Duration, target: StateId) -> Option<Self> {
        if duration.is_zero() {
            None
        } else {
            Some(Self { duration, target })
        }
    }

    /// Whether `elapsed_ms` milliseconds reach the deadline.
    pub fn expired(&self, elapsed_ms: u64) -> bool {
        Duration::from_millis(elapsed_ms) >= self.duration
    }
}

/// Definition of a single state.
///
/// Built with [`StateDef::new`] and the chained setters, then handed to
/// [`Engine::add_state`]. A definition without an action is rejected when
/// added.
///
/// # Example
///
/// ```rust
/// use autostate::core::{StateDef, StateId};
///
/// #[derive(Default)]
/// struct Pump {
///     strokes: u32,
///     running: bool,
/// }
///
/// let pumping = StateDef::new(StateId(2))
///     .action(|pump: &mut Pump| pump.strokes += 1)
///     .on_enter(|pump: &mut Pump| pump.running = true)
///     .on_exit(|pump: &mut Pump| pump.running = false);
///
/// assert_eq!(pumping.id(), StateId(2));
/// assert!(pumping.has_action());
/// ```
///
/// [`Engine::add_state`]: crate::engine::Engine::add_state
pub struct StateDef<Ctx> {
    id: StateId,
    action: Option<Action<Ctx>>,
    on_enter: Option<Hook<Ctx>>,
    on_exit: Option<Hook<Ctx>>,
    timeout: Option<Timeout>,
}

impl<Ctx> StateDef<Ctx> {
    /// Start a definition with no callbacks.
    pub fn new(id: StateId) -> Self {
        Self {
            id,
            action: None,
            on_enter: None,
            on_exit: None,
            timeout: None,
        }
    }

    /// Set the action run on every tick while the state is active.
    pub fn action(mut self, action: Action<Ctx>) -> Self {
        self.action = Some(action);
        self
    }

    pub fn on_enter(mut self, hook: Hook<Ctx>) -> Self {
        self.on_enter = Some(hook);
        self
    }

    pub fn on_exit(mut self, hook: Hook<Ctx>) -> Self {
        self.on_exit = Some(hook);
        self
    }

    pub fn id(&self) -> StateId {
        self.id
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    pub fn timeout(&self) -> Option<Timeout> {
        self.timeout
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Timeout>) {
        self.timeout = timeout;
    }

    pub(crate) fn run(&self, ctx: &mut Ctx) {
        if let Some(action) = self.action {
            action(ctx);
        }
    }

    pub(crate) fn enter(&self, ctx: &mut Ctx) {
        if let Some(hook) = self.on_enter {
            hook(ctx);
        }
    }

    pub(crate) fn exit(&self, ctx: &mut Ctx) {
        if let Some(hook) = self.on_exit {
            hook(ctx);
        }
    }
}

// Manual impls: derive would demand `Ctx: Clone`, but only fn pointers are stored.
impl<Ctx> Clone for StateDef<Ctx> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Ctx> Copy for StateDef<Ctx> {}

impl<Ctx> fmt::Debug for StateDef<Ctx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateDef")
            .field("id", &self.id)
            .field("has_action", &self.action.is_some())
            .field("has_on_enter", &self.on_enter.is_some())
            .field("has_on_exit", &self.on_exit.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}
