//! Review endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::review::{Review, UpsertReview},
};

use super::AuthenticatedUser;

/// Create or update the review for a book (owner only)
#[utoipa::path(
    put,
    path = "/books/{id}/review",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpsertReview,
    responses(
        (status = 200, description = "Review saved", body = Review),
        (status = 400, description = "Score out of range"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn upsert_review(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(book_id): Path<i32>,
    Json(review): Json<UpsertReview>,
) -> AppResult<Json<Review>> {
    let saved = state
        .services
        .reviews
        .upsert_review(&claims, book_id, review)
        .await?;
    Ok(Json(saved))
}
