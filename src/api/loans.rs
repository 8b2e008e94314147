//! Lending endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::loan::{CreateLoan, Loan},
};

use super::AuthenticatedUser;

/// Loan history for a book (owner only)
#[utoipa::path(
    get,
    path = "/books/{id}/loans",
    tag = "loans",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Loans for the book, newest first", body = Vec<Loan>),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn list_loans(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(book_id): Path<i32>,
) -> AppResult<Json<Vec<Loan>>> {
    let loans = state.services.lending.list_loans(&claims, book_id).await?;
    Ok(Json(loans))
}

/// Record a loan of a book (owner only)
#[utoipa::path(
    post,
    path = "/books/{id}/loans",
    tag = "loans",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = CreateLoan,
    responses(
        (status = 201, description = "Loan recorded", body = Loan),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn create_loan(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(book_id): Path<i32>,
    Json(loan): Json<CreateLoan>,
) -> AppResult<(StatusCode, Json<Loan>)> {
    let created = state
        .services
        .lending
        .create_loan(&claims, book_id, loan)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Mark a loan as returned today (owner only)
#[utoipa::path(
    post,
    path = "/loans/{id}/return",
    tag = "loans",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Loan returned", body = Loan),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Loan not found"),
        (status = 409, description = "Already returned")
    )
)]
pub async fn return_loan(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(loan_id): Path<i32>,
) -> AppResult<Json<Loan>> {
    let loan = state.services.lending.return_loan(&claims, loan_id).await?;
    Ok(Json(loan))
}
