//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Question: free text asked by a student
//! - Answer: free text returned to the student
//! - Expression: a two-operand integer arithmetic problem

mod answer;
mod expression;
mod question;

pub use answer::*;
pub use expression::*;
pub use question::*;
