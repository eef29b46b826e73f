//! The engine and its external collaborators.
//!
//! - [`Engine`]: current-state cursor, event dispatch, timeout polling
//! - [`Clock`]: monotonic time source sampled by the engine
//! - [`DebugSink`]: optional line-oriented trace output
//!
//! The engine is single-threaded and synchronous. Callbacks receive the
//! context, never the engine, so they cannot re-enter it.

mod clock;
mod debug;
mod machine;

pub use clock::{Clock, ManualClock, SystemClock};
pub use debug::{DebugSink, TracingSink};
pub use machine::Engine;
