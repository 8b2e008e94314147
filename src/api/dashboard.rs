//! Dashboard endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::book::Book};

use super::AuthenticatedUser;

/// Library summary for the authenticated user
#[derive(Serialize, ToSchema)]
pub struct DashboardResponse {
    /// Number of owned books
    pub total_books: i64,
    /// Five most recently added books
    pub recent_books: Vec<Book>,
    /// Number of wishlist items
    pub wishlist_count: i64,
}

/// Get the authenticated user's library summary
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Library summary", body = DashboardResponse)
    )
)]
pub async fn dashboard(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<DashboardResponse>> {
    let summary = state.services.dashboard.dashboard(&claims).await?;
    Ok(Json(summary))
}
