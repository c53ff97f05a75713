//! Dashboard Routes - placeholder, no user data behind it yet

use axum::{routing::get, Json, Router};

use crate::models::DashboardResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Dashboard greeting", body = DashboardResponse)
    ),
    tag = "Dashboard"
)]
pub async fn get_dashboard() -> Json<DashboardResponse> {
    Json(DashboardResponse::placeholder())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_dashboard))
}
