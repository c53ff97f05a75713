//! Domain Errors
//!
//! Error types for answer resolution. None of these reach the HTTP caller
//! as an error status; [`ResolveError::to_answer`] renders them as text.

use thiserror::Error;

use crate::domain::entities::Answer;
use crate::ports::CompletionError;

/// Fixed reply when an arithmetic problem cannot be computed
pub const ARITHMETIC_APOLOGY: &str = "Oops! I couldn't calculate that math problem.";

/// Prefix for failures reported by the completion service itself
pub const SERVICE_ERROR_PREFIX: &str = "OpenAI API error";

/// Prefix for every other delegation failure (network, DNS, TLS...)
pub const CONNECTION_ERROR_PREFIX: &str = "Connection error";

/// Arithmetic tier errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArithmeticError {
    #[error("Operand cannot be represented: {0}")]
    InvalidOperand(String),

    #[error("{0}")]
    UnknownOperator(String),

    #[error("Integer division result too large for a float")]
    QuotientTooLarge,
}

/// Errors raised while resolving a question
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),

    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),
}

impl ResolveError {
    /// Render the failure as the text the student sees
    pub fn to_answer(&self) -> Answer {
        match self {
            ResolveError::Arithmetic(_) => Answer::new(ARITHMETIC_APOLOGY),
            ResolveError::Completion(e) if e.is_service_error() => {
                Answer::new(format!("{}: {}", SERVICE_ERROR_PREFIX, e))
            }
            ResolveError::Completion(e) => {
                Answer::new(format!("{}: {}", CONNECTION_ERROR_PREFIX, e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_errors_render_apology() {
        let err = ResolveError::from(ArithmeticError::QuotientTooLarge);
        assert_eq!(err.to_answer().as_str(), ARITHMETIC_APOLOGY);
    }

    #[test]
    fn test_completion_errors_render_by_kind() {
        let api = ResolveError::from(CompletionError::Api {
            status: 401,
            message: "Incorrect API key provided".to_string(),
        });
        assert_eq!(
            api.to_answer().as_str(),
            "OpenAI API error: Incorrect API key provided (HTTP 401)"
        );

        let connection = ResolveError::from(CompletionError::Connection(
            "error sending request".to_string(),
        ));
        assert_eq!(
            connection.to_answer().as_str(),
            "Connection error: error sending request"
        );
    }
}
