//! Chatbot DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters for the chatbot endpoint
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ChatbotQuery {
    /// Free-text question (required)
    pub question: String,
}

/// Chatbot answer. Failures are reported inside `answer`, never as an error status.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatbotResponse {
    pub answer: String,
}
