//! Study Buddy API Routes
//!
//! - / - Chat page
//! - /chatbot - Question answering
//! - /dashboard - Dashboard placeholder
//! - /health - Health check
//! - /swagger-ui - API documentation

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::AppState;

pub mod chatbot;
pub mod dashboard;
pub mod health;
pub mod home;
pub mod swagger;

/// Build the full router with shared state
pub fn router(state: AppState) -> Router {
    let openapi = swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(home::router())
        .merge(health::router())
        .merge(chatbot::router())
        .merge(dashboard::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
