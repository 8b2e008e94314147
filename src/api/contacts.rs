//! Contact request endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::contact::{ContactRequest, CreateContactRequest},
};

use super::AuthenticatedUser;

/// Send a contact request to a book's owner (non-owners only)
#[utoipa::path(
    post,
    path = "/books/{id}/contact",
    tag = "contacts",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = CreateContactRequest,
    responses(
        (status = 201, description = "Request sent", body = ContactRequest),
        (status = 403, description = "Own book, or catalog is private"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn create_request(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(book_id): Path<i32>,
    Json(request): Json<CreateContactRequest>,
) -> AppResult<(StatusCode, Json<ContactRequest>)> {
    let created = state
        .services
        .contacts
        .create_request(&claims, book_id, request)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Contact requests addressed to the authenticated user
#[utoipa::path(
    get,
    path = "/contacts/received",
    tag = "contacts",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Received requests, newest first", body = Vec<ContactRequest>)
    )
)]
pub async fn list_received(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<ContactRequest>>> {
    let requests = state.services.contacts.list_received(&claims).await?;
    Ok(Json(requests))
}

/// Contact requests sent by the authenticated user
#[utoipa::path(
    get,
    path = "/contacts/sent",
    tag = "contacts",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Sent requests, newest first", body = Vec<ContactRequest>)
    )
)]
pub async fn list_sent(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<ContactRequest>>> {
    let requests = state.services.contacts.list_sent(&claims).await?;
    Ok(Json(requests))
}
