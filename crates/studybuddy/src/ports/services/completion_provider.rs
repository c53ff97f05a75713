//! Completion Provider Port
//!
//! Abstract interface for the external text-completion service used as the
//! last resolution tier. The production implementation talks to OpenAI;
//! tests substitute in-process fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generation parameters sent with every prompt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionOptions {
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            max_tokens: 100,
            temperature: 0.7,
        }
    }
}

/// Text produced by the completion service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// Generated text, already trimmed
    pub text: String,
    /// Model that generated the text
    pub model: String,
}

/// Completion service failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    #[error("No API key provided")]
    MissingApiKey,

    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    #[error("Rate limit reached, please try again later")]
    RateLimited,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Connection(String),
}

impl CompletionError {
    /// Whether the service itself reported the failure, as opposed to the
    /// request never completing
    pub fn is_service_error(&self) -> bool {
        !matches!(self, CompletionError::Connection(_))
    }
}

/// Completion service interface
///
/// # Example
///
/// ```rust,ignore
/// use studybuddy::ports::CompletionProvider;
///
/// struct EchoProvider;
///
/// #[async_trait]
/// impl CompletionProvider for EchoProvider {
///     async fn complete(&self, prompt: &str, _options: &CompletionOptions)
///         -> Result<Completion, CompletionError> {
///         Ok(Completion { text: prompt.to_string(), model: "echo".to_string() })
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a completion for a single prompt
    async fn complete(
        &self,
        prompt: &str,
        options: &CompletionOptions,
    ) -> Result<Completion, CompletionError>;

    /// Get the provider name (e.g., "openai")
    fn provider_name(&self) -> &str;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
