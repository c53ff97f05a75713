//! Home Route - the chat page

use axum::{response::Html, routing::get, Router};

use crate::AppState;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Chat page with a question box that calls `/chatbot`
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Chat page", content_type = "text/html", body = String)
    ),
    tag = "Chatbot"
)]
pub async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home))
}
