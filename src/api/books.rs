//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        book::{Book, BookDetails, BookQuery, CreateBook, UpdateBook},
        user::PublicOwner,
    },
};

use super::AuthenticatedUser;

/// List the authenticated user's own books, with optional search
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    security(("bearer_auth" = [])),
    params(BookQuery),
    responses(
        (status = 200, description = "Own catalog, newest first", body = Vec<Book>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_my_books(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state
        .services
        .catalog
        .my_catalog(&claims, query.query.as_deref())
        .await?;
    Ok(Json(books))
}

/// Browse another user's catalog by username
#[utoipa::path(
    get,
    path = "/catalogs/{username}/books",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("username" = String, Path, description = "Catalog owner's username"),
        BookQuery
    ),
    responses(
        (status = 200, description = "Catalog contents", body = Vec<Book>),
        (status = 403, description = "Catalog is private"),
        (status = 404, description = "User not found")
    )
)]
pub async fn browse_catalog(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(username): Path<String>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state
        .services
        .catalog
        .browse_catalog(&claims, &username, query.query.as_deref())
        .await?;
    Ok(Json(books))
}

/// List public catalog owners with their book counts
#[utoipa::path(
    get,
    path = "/catalogs/public",
    tag = "books",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Public catalog owners", body = Vec<PublicOwner>)
    )
)]
pub async fn list_public_owners(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<PublicOwner>>> {
    let owners = state.services.catalog.list_public_owners(&claims).await?;
    Ok(Json(owners))
}

/// Get a book with its review and loan history
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookDetails),
        (status = 403, description = "Catalog is private"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<BookDetails>> {
    let details = state.services.catalog.get_book_details(&claims, id).await?;
    Ok(Json(details))
}

/// Add a book to the authenticated user's catalog
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    security(("bearer_auth" = [])),
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(book): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let created = state.services.catalog.create_book(&claims, book).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a book (owner only)
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(update): Json<UpdateBook>,
) -> AppResult<Json<Book>> {
    let updated = state.services.catalog.update_book(&claims, id, update).await?;
    Ok(Json(updated))
}

/// Delete a book and its review and loans (owner only)
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete_book(&claims, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
