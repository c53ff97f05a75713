//! Chatbot Routes - Question answering

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::models::{ChatbotQuery, ChatbotResponse};
use crate::AppState;

/// Answer a question
///
/// GET /chatbot?question=7 / 2
#[utoipa::path(
    get,
    path = "/chatbot",
    params(ChatbotQuery),
    responses(
        (status = 200, description = "Answer, including rendered failures", body = ChatbotResponse),
        (status = 400, description = "Missing question parameter")
    ),
    tag = "Chatbot"
)]
pub async fn ask(
    State(state): State<AppState>,
    Query(query): Query<ChatbotQuery>,
) -> Json<ChatbotResponse> {
    let answer = state.resolver.resolve(query.question).await;

    Json(ChatbotResponse {
        answer: answer.into_inner(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/chatbot", get(ask))
}
