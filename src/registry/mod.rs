//! Fixed-capacity tables backing the engine.
//!
//! Both tables are inline arrays sized by const generics. They only ever
//! grow, and every rejected insert leaves them untouched.

pub mod error;
mod states;
mod transitions;

pub use error::{EngineError, Table};
pub use states::StateRegistry;
pub use transitions::TransitionRegistry;
