//! Line-oriented debug output.
//!
//! A [`DebugSink`] is borrowed by the engine while debugging is enabled.
//! With no sink attached the engine writes nothing anywhere.

use crate::core::StateId;
use std::fmt::{self, Write as _};

/// External writer receiving engine trace lines.
///
/// Fragments passed to [`print`](DebugSink::print) belong to the line that
/// the next [`println`](DebugSink::println) completes.
pub trait DebugSink {
    /// Write part of a line.
    fn print(&mut self, fragment: fmt::Arguments<'_>);

    /// Write the rest of a line and terminate it.
    fn println(&mut self, line: fmt::Arguments<'_>);
}

/// Collects trace output as newline-terminated text.
impl DebugSink for String {
    fn print(&mut self, fragment: fmt::Arguments<'_>) {
        let _ = self.write_fmt(fragment);
    }

    fn println(&mut self, line: fmt::Arguments<'_>) {
        let _ = self.write_fmt(line);
        self.push('\n');
    }
}

/// Forwards each completed line to `tracing` at debug level.
///
/// # Example
///
/// ```rust
/// use autostate::engine::{DebugSink, TracingSink};
///
/// let mut sink = TracingSink::new();
/// sink.print(format_args!("Event received: {}", 10));
/// sink.println(format_args!(" in state {}", 1));
/// assert!(sink.pending().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct TracingSink {
    line: String,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fragments written since the last completed line.
    pub fn pending(&self) -> &str {
        &self.line
    }
}

impl DebugSink for TracingSink {
    fn print(&mut self, fragment: fmt::Arguments<'_>) {
        let _ = self.line.write_fmt(fragment);
    }

    fn println(&mut self, line: fmt::Arguments<'_>) {
        let _ = self.line.write_fmt(line);
        tracing::debug!(target: "autostate::debug", "{}", self.line);
        self.line.clear();
    }
}

/// Displays an optional state as its id, or `none`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor(pub(crate) Option<StateId>);

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(id) => write!(f, "{id}"),
            None => f.write_str("none"),
        }
    }
}
