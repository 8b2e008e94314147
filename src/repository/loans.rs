//! Loans repository for database operations

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::loan::{CreateLoan, Loan},
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get loan by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Loan> {
        sqlx::query_as::<_, Loan>("SELECT * FROM loans WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", id)))
    }

    /// All loans for a book, newest first
    pub async fn list_for_book(&self, book_id: i32) -> AppResult<Vec<Loan>> {
        let loans = sqlx::query_as::<_, Loan>(
            "SELECT * FROM loans WHERE book_id = $1 ORDER BY loan_date DESC, id DESC",
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(loans)
    }

    /// Record a new loan; the actual return date starts null
    pub async fn create(&self, book_id: i32, loan: &CreateLoan) -> AppResult<Loan> {
        let created = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO loans (book_id, borrower_name, loan_date, expected_return_date, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(book_id)
        .bind(&loan.borrower_name)
        .bind(loan.loan_date)
        .bind(loan.expected_return_date)
        .bind(&loan.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Set the actual return date
    pub async fn mark_returned(&self, id: i32, returned_on: NaiveDate) -> AppResult<Loan> {
        sqlx::query_as::<_, Loan>(
            "UPDATE loans SET actual_return_date = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(returned_on)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", id)))
    }
}
