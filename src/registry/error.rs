//! Configuration errors reported by the state and transition tables.

use crate::core::StateId;
use std::fmt;
use thiserror::Error;

/// Which fixed-capacity table an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    States,
    Transitions,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Table::States => f.write_str("states"),
            Table::Transitions => f.write_str("transitions"),
        }
    }
}

/// Errors that can occur while configuring a machine.
///
/// None of these are fatal: the table that rejected the entry is left
/// exactly as it was.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("maximum {table} exceeded ({capacity})")]
    CapacityExceeded { table: Table, capacity: usize },

    #[error("state {0} already exists")]
    DuplicateId(StateId),

    #[error("state {0} has no action")]
    MissingAction(StateId),

    #[error("invalid transition {from} -> {to}")]
    InvalidReference { from: StateId, to: StateId },
}
