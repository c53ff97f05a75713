//! Study Buddy Domain Library
//!
//! Core domain types and interfaces for the AI Study Buddy chatbot.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Question, Answer, Expression)
//!   - `value_objects/`: Immutable value types (Tier, Operator)
//!   - `services/`: The tiered answer resolver (arithmetic, keywords, delegation)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: External service interfaces (completion provider)
//!
//! # Usage
//!
//! ```rust,ignore
//! use studybuddy::{AnswerResolver, CompletionOptions};
//!
//! let resolver = AnswerResolver::new(provider, CompletionOptions::default());
//! let answer = resolver.resolve("3 + 4").await;
//! assert_eq!(answer.as_str(), "The answer is 7.");
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Answer, AnswerResolver, ArithmeticError, Evaluation, Expression, Operator, Question,
    Resolution, ResolveError, Tier,
};
pub use ports::{Completion, CompletionError, CompletionOptions, CompletionProvider};
