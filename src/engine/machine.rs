//! The state machine engine.

use crate::core::{
    EventId, EventPayload, StateDef, StateId, Timeout, TransitionCause, TransitionDef,
    TransitionRecord,
};
use crate::engine::clock::{Clock, SystemClock};
use crate::engine::debug::{Cursor, DebugSink};
use crate::registry::{EngineError, StateRegistry, TransitionRegistry};
use std::fmt;
use std::time::Duration;

/// Fixed-capacity state machine driven by a host loop.
///
/// `Ctx` is handed to every action, hook and guard. `C` supplies the time
/// used for entry timestamps and timeouts. `MAX_STATES` and
/// `MAX_TRANSITIONS` bound the tables for the lifetime of the engine.
///
/// Configuration calls return `Result`. Runtime calls never fail: anything
/// that refers to an unknown state is ignored, and reported on the debug
/// sink if one is attached.
///
/// # Example
///
/// ```rust
/// use autostate::core::{EventId, StateDef, StateId, TransitionDef};
/// use autostate::engine::{Engine, ManualClock};
///
/// #[derive(Default)]
/// struct Blinker {
///     ticks: u32,
/// }
///
/// const OFF: StateId = StateId(1);
/// const ON: StateId = StateId(2);
/// const TOGGLE: EventId = EventId(10);
///
/// let mut engine: Engine<'_, Blinker, ManualClock, 2, 2> =
///     Engine::new(Blinker::default(), ManualClock::new(0));
///
/// engine.add_state(StateDef::new(OFF).action(|_: &mut Blinker| {})).unwrap();
/// engine.add_state(StateDef::new(ON).action(|b: &mut Blinker| b.ticks += 1)).unwrap();
/// engine.add_transition(TransitionDef::new(OFF, TOGGLE, ON)).unwrap();
/// engine.set_initial_state(OFF);
///
/// assert!(engine.handle_event(TOGGLE));
/// engine.update();
///
/// assert_eq!(engine.current_state(), Some(ON));
/// assert_eq!(engine.context().ticks, 1);
/// ```
pub struct Engine<
    'a,
    Ctx,
    C = SystemClock,
    const MAX_STATES: usize = 10,
    const MAX_TRANSITIONS: usize = 20,
> {
    states: StateRegistry<Ctx, MAX_STATES>,
    transitions: TransitionRegistry<Ctx, MAX_TRANSITIONS>,
    current: Option<StateId>,
    initial: Option<StateId>,
    entered_at_ms: u64,
    pending_payload: Option<EventPayload>,
    debug: Option<&'a mut dyn DebugSink>,
    clock: C,
    context: Ctx,
    last_transition: Option<TransitionRecord>,
    transitions_taken: u32,
}

impl<'a, Ctx, C, const MAX_STATES: usize, const MAX_TRANSITIONS: usize>
    Engine<'a, Ctx, C, MAX_STATES, MAX_TRANSITIONS>
where
    C: Clock,
{
    /// Create an engine with empty tables and no active state.
    pub fn new(context: Ctx, clock: C) -> Self {
        Self {
            states: StateRegistry::new(),
            transitions: TransitionRegistry::new(),
            current: None,
            initial: None,
            entered_at_ms: 0,
            pending_payload: None,
            debug: None,
            clock,
            context,
            last_transition: None,
            transitions_taken: 0,
        }
    }

    // Configuration

    /// Add a state. It starts without a timeout.
    pub fn add_state(&mut self, state: StateDef<Ctx>) -> Result<(), EngineError> {
        let id = state.id();
        self.states.add(state).map_err(|err| self.reject(err))?;
        tracing::debug!(state = %id, "state added");
        Ok(())
    }

    /// Add a transition. Both endpoints must already be states.
    pub fn add_transition(&mut self, transition: TransitionDef<Ctx>) -> Result<(), EngineError> {
        let (from, event, to) = (transition.from, transition.event, transition.to);
        self.transitions
            .add(transition, &self.states)
            .map_err(|err| self.reject(err))?;
        tracing::debug!(from = %from, event = %event, to = %to, "transition added");
        Ok(())
    }

    /// Attach or overwrite the timeout of `id`. Unknown ids are ignored and
    /// a zero `duration` disables the timeout.
    pub fn set_timeout(&mut self, id: StateId, duration: Duration, target: StateId) {
        if self.states.set_timeout(id, duration, target) {
            tracing::debug!(state = %id, ?duration, target = %target, "timeout configured");
        }
    }

    /// Remove any timeout from `id`.
    pub fn clear_timeout(&mut self, id: StateId) {
        self.states.set_timeout(id, Duration::ZERO, id);
    }

    /// Make `id` the starting state without running its entry hook.
    pub fn set_initial_state(&mut self, id: StateId) {
        if !self.states.contains(id) {
            self.missing(id);
            return;
        }
        self.current = Some(id);
        self.initial = Some(id);
        self.entered_at_ms = self.clock.now_ms();
        tracing::debug!(state = %id, "initial state set");
    }

    /// Attach a sink for trace lines, replacing any previous one.
    pub fn enable_debug(&mut self, sink: &'a mut dyn DebugSink) {
        self.debug = Some(sink);
    }

    /// Detach the debug sink.
    pub fn disable_debug(&mut self) {
        self.debug = None;
    }

    /// Whether a debug sink is attached.
    pub fn is_debug_enabled(&self) -> bool {
        self.debug.is_some()
    }

    // Operation

    /// Move to `id`, running the exit hook of the active state and then the
    /// entry hook of `id`.
    ///
    /// Transitioning to the active state is allowed: both hooks run and the
    /// state's timeout window restarts.
    pub fn transition_to(&mut self, id: StateId) {
        self.commit(id, TransitionCause::Direct);
    }

    /// Dispatch an event. Returns whether a transition was taken.
    pub fn handle_event(&mut self, event: EventId) -> bool {
        self.handle_event_with(event, None)
    }

    /// Dispatch an event carrying a payload.
    ///
    /// The payload is visible through [`pending_payload`](Self::pending_payload)
    /// only while the event is being handled. Guards and actions do not
    /// receive it.
    pub fn handle_event_with(&mut self, event: EventId, payload: Option<EventPayload>) -> bool {
        self.pending_payload = payload;
        tracing::debug!(event = %event, state = %Cursor(self.current), "event received");
        let current = Cursor(self.current);
        if let Some(sink) = self.debug.as_deref_mut() {
            sink.print(format_args!("Event received: {event}"));
            sink.println(format_args!(" in state {current}"));
        }

        let fired = match self.select(event) {
            Some((from, to)) => {
                self.trace(format_args!("Executing transition: {from} -> {to}"));
                self.commit(to, TransitionCause::Event(event));
                true
            }
            None => false,
        };

        self.pending_payload = None;
        fired
    }

    /// Run the active state's action once.
    pub fn run(&mut self) {
        if let Some(state) = self.current.and_then(|id| self.states.get(id)) {
            state.run(&mut self.context);
        }
    }

    /// One tick: take an expired timeout, then run the (possibly new)
    /// active state's action.
    pub fn update(&mut self) {
        if let Some((from, timeout)) = self.expired_timeout() {
            tracing::debug!(from = %from, to = %timeout.target, "state timed out");
            self.trace(format_args!("Timeout in state {from} -> {}", timeout.target));
            self.commit(timeout.target, TransitionCause::Timeout);
        }
        self.run();
    }

    /// Return to the initial state through a normal transition, hooks
    /// included. Does nothing if no initial state was set.
    pub fn reset(&mut self) {
        if let Some(initial) = self.initial {
            self.commit(initial, TransitionCause::Reset);
        }
    }

    // Inspection

    /// The active state, if any.
    pub fn current_state(&self) -> Option<StateId> {
        self.current
    }

    /// The state `reset` returns to, if one was set.
    pub fn initial_state(&self) -> Option<StateId> {
        self.initial
    }

    /// Whether `id` has been added.
    pub fn state_exists(&self, id: StateId) -> bool {
        self.states.contains(id)
    }

    /// Read access to the state table.
    pub fn states(&self) -> &StateRegistry<Ctx, MAX_STATES> {
        &self.states
    }

    /// Read access to the transition table.
    pub fn transitions(&self) -> &TransitionRegistry<Ctx, MAX_TRANSITIONS> {
        &self.transitions
    }

    /// Milliseconds since the active state was entered.
    pub fn time_in_state_ms(&self) -> Option<u64> {
        self.current
            .map(|_| self.clock.now_ms().saturating_sub(self.entered_at_ms))
    }

    /// The most recent committed transition.
    pub fn last_transition(&self) -> Option<&TransitionRecord> {
        self.last_transition.as_ref()
    }

    /// Number of committed transitions, wrapping on overflow.
    pub fn transitions_taken(&self) -> u32 {
        self.transitions_taken
    }

    /// Payload of the event being dispatched. Always `None` between calls.
    pub fn pending_payload(&self) -> Option<EventPayload> {
        self.pending_payload
    }

    /// Shared access to the callback context.
    pub fn context(&self) -> &Ctx {
        &self.context
    }

    /// Mutable access to the callback context.
    pub fn context_mut(&mut self) -> &mut Ctx {
        &mut self.context
    }

    /// Consume the engine and return its context.
    pub fn into_context(self) -> Ctx {
        self.context
    }

    /// The clock timestamps are read from.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    // Internals

    fn commit(&mut self, to: StateId, cause: TransitionCause) {
        if !self.states.contains(to) {
            self.missing(to);
            return;
        }

        let from = self.current;
        if let Some(active) = from.and_then(|id| self.states.get(id)) {
            active.exit(&mut self.context);
        }

        let now = self.clock.now_ms();
        self.current = Some(to);
        self.entered_at_ms = now;

        if let Some(next) = self.states.get(to) {
            next.enter(&mut self.context);
        }

        self.last_transition = Some(TransitionRecord {
            from,
            to,
            at_ms: now,
            cause,
        });
        self.transitions_taken = self.transitions_taken.wrapping_add(1);

        tracing::debug!(from = %Cursor(from), to = %to, ?cause, "transitioned");
        self.trace(format_args!("Transitioned to state: {to}"));
    }

    /// First transition out of the active state on `event` whose guard
    /// passes. Guards after the winner are not evaluated.
    fn select(&self, event: EventId) -> Option<(StateId, StateId)> {
        let from = self.current?;
        self.transitions
            .candidates(from, event)
            .find(|t| t.permits(&self.context))
            .map(|t| (from, t.to))
    }

    fn expired_timeout(&self) -> Option<(StateId, Timeout)> {
        let id = self.current?;
        let timeout = self.states.get(id)?.timeout()?;
        let elapsed = self.clock.now_ms().saturating_sub(self.entered_at_ms);
        tracing::trace!(state = %id, elapsed, "checking timeout");
        timeout.expired(elapsed).then_some((id, timeout))
    }

    fn reject(&mut self, err: EngineError) -> EngineError {
        tracing::warn!(error = %err, "rejected machine configuration");
        self.trace(format_args!("Error: {err}"));
        err
    }

    fn missing(&mut self, id: StateId) {
        tracing::warn!(state = %id, "unknown state");
        self.trace(format_args!("Error: state {id} does not exist"));
    }

    fn trace(&mut self, line: fmt::Arguments<'_>) {
        if let Some(sink) = self.debug.as_deref_mut() {
            sink.println(line);
        }
    }
}
