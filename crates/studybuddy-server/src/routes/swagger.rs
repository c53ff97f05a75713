//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{ChatbotResponse, DashboardResponse, HealthCheck};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::home::home,
        super::chatbot::ask,
        super::dashboard::get_dashboard,
        super::health::health_check,
    ),
    info(
        title = "AI Study Buddy API",
        version = "0.1.0",
        description = "Student chatbot: arithmetic, canned answers, and completions from OpenAI.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Chatbot", description = "Chat page and question answering"),
        (name = "Dashboard", description = "Dashboard placeholder"),
    ),
    components(
        schemas(
            ChatbotResponse,
            DashboardResponse,
            HealthCheck,
        )
    ),
)]
pub struct ApiDoc;
