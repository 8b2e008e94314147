//! Wishlist endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::wishlist::{CreateWishlistItem, WishlistItem},
};

use super::AuthenticatedUser;

/// The authenticated user's wishlist, priority high to low
#[utoipa::path(
    get,
    path = "/wishlist",
    tag = "wishlist",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Wishlist items", body = Vec<WishlistItem>)
    )
)]
pub async fn list_items(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<WishlistItem>>> {
    let items = state.services.wishlist.list_items(&claims).await?;
    Ok(Json(items))
}

/// Add an item to the wishlist
#[utoipa::path(
    post,
    path = "/wishlist",
    tag = "wishlist",
    security(("bearer_auth" = [])),
    request_body = CreateWishlistItem,
    responses(
        (status = 201, description = "Item added", body = WishlistItem),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn add_item(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(item): Json<CreateWishlistItem>,
) -> AppResult<(StatusCode, Json<WishlistItem>)> {
    let created = state.services.wishlist.add_item(&claims, item).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Remove an item from the wishlist
#[utoipa::path(
    delete,
    path = "/wishlist/{id}",
    tag = "wishlist",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Wishlist item ID")
    ),
    responses(
        (status = 204, description = "Item removed"),
        (status = 403, description = "Item belongs to another user"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn remove_item(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(item_id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.wishlist.remove_item(&claims, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
