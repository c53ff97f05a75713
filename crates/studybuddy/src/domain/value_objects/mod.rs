//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod operator;
mod tier;

pub use operator::*;
pub use tier::*;
