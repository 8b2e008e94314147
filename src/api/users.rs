//! User administration and account endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::user::{User, UserWithBookCount},
};

use super::AuthenticatedUser;

/// List all users with owned-book counts (admin only)
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All users with book counts", body = Vec<UserWithBookCount>),
        (status = 403, description = "Not an administrator")
    )
)]
pub async fn list_users(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<UserWithBookCount>>> {
    let users = state.services.admin.list_users_with_counts(&claims).await?;
    Ok(Json(users))
}

/// Flip a user's catalog visibility (admin only)
#[utoipa::path(
    post,
    path = "/users/{id}/visibility",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 403, description = "Not an administrator"),
        (status = 404, description = "User not found")
    )
)]
pub async fn toggle_user_visibility(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(user_id): Path<i32>,
) -> AppResult<Json<User>> {
    let user = state
        .services
        .admin
        .toggle_catalog_visibility(&claims, user_id)
        .await?;
    Ok(Json(user))
}

/// Flip the authenticated user's own catalog visibility
#[utoipa::path(
    post,
    path = "/account/visibility",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated user", body = User)
    )
)]
pub async fn toggle_own_visibility(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<User>> {
    let user = state.services.admin.toggle_own_visibility(&claims).await?;
    Ok(Json(user))
}
