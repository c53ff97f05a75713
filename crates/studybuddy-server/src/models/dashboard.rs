//! Dashboard DTO - placeholder greeting

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardResponse {
    pub message: String,
    pub user: String,
}

impl DashboardResponse {
    pub fn placeholder() -> Self {
        Self {
            message: "Welcome to your dashboard!".to_string(),
            user: "test_user".to_string(),
        }
    }
}
