//! Guard predicates for controlling transitions.
//!
//! Guards are boolean functions over the machine context that decide
//! whether a candidate transition may be taken. They only get shared
//! access to the context and should not have side effects.

use std::fmt;

/// Predicate that decides if a transition can execute.
///
/// Guards are evaluated lazily at dispatch time, in the order their
/// transitions were added, and evaluation stops at the first one that passes.
///
/// # Example
///
/// ```rust
/// use autostate::core::Guard;
///
/// struct Tank {
///     level: u8,
/// }
///
/// let is_full = Guard::new(|tank: &Tank| tank.level >= 90);
///
/// assert!(is_full.check(&Tank { level: 95 }));
/// assert!(!is_full.check(&Tank { level: 10 }));
/// ```
pub struct Guard<Ctx> {
    predicate: fn(&Ctx) -> bool,
}

impl<Ctx> Guard<Ctx> {
    /// Create a guard from a predicate function.
    pub fn new(predicate: fn(&Ctx) -> bool) -> Self {
        Guard { predicate }
    }

    /// Evaluate the predicate against the context.
    pub fn check(&self, ctx: &Ctx) -> bool {
        (self.predicate)(ctx)
    }
}

impl<Ctx> Clone for Guard<Ctx> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Ctx> Copy for Guard<Ctx> {}

impl<Ctx> fmt::Debug for Guard<Ctx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard")
    }
}
