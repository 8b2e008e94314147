//! Loan model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Loan of an owned book to a named borrower.
/// The borrower is free text, not a user reference.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Loan {
    pub id: i32,
    pub book_id: i32,
    pub borrower_name: String,
    pub loan_date: NaiveDate,
    pub expected_return_date: Option<NaiveDate>,
    pub actual_return_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl Loan {
    /// A loan is outstanding until its actual return date is set
    pub fn is_outstanding(&self) -> bool {
        self.actual_return_date.is_none()
    }
}

/// Create loan request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLoan {
    #[validate(length(min = 1, max = 200, message = "Borrower name is required"))]
    pub borrower_name: String,
    pub loan_date: NaiveDate,
    pub expected_return_date: Option<NaiveDate>,
    pub notes: Option<String>,
}
