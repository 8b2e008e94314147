//! Lending service: loans of owned books to named borrowers

use chrono::Utc;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        loan::{CreateLoan, Loan},
        user::UserClaims,
    },
    permissions,
    repository::Repository,
};

#[derive(Clone)]
pub struct LendingService {
    repository: Repository,
}

impl LendingService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Record a loan against a book; only its owner may lend it
    pub async fn create_loan(
        &self,
        actor: &UserClaims,
        book_id: i32,
        loan: CreateLoan,
    ) -> AppResult<Loan> {
        loan.validate()?;

        let book = self.repository.books.get_by_id(book_id).await?;
        if !permissions::can_lend(actor.user_id, &book) {
            return Err(AppError::Forbidden(
                "Only the owner may lend this book".to_string(),
            ));
        }

        self.repository.loans.create(book_id, &loan).await
    }

    /// Mark a loan as returned today; guarded via the loan's book owner.
    /// Returning an already-returned loan is a conflict rather than a
    /// silent date overwrite.
    pub async fn return_loan(&self, actor: &UserClaims, loan_id: i32) -> AppResult<Loan> {
        let loan = self.repository.loans.get_by_id(loan_id).await?;
        let book = self.repository.books.get_by_id(loan.book_id).await?;

        if !permissions::can_lend(actor.user_id, &book) {
            return Err(AppError::Forbidden(
                "Only the owner may return this loan".to_string(),
            ));
        }

        if !loan.is_outstanding() {
            return Err(AppError::Conflict("Loan already returned".to_string()));
        }

        let today = Utc::now().date_naive();
        self.repository.loans.mark_returned(loan_id, today).await
    }

    /// Loan history for a book; owner only
    pub async fn list_loans(&self, actor: &UserClaims, book_id: i32) -> AppResult<Vec<Loan>> {
        let book = self.repository.books.get_by_id(book_id).await?;
        if !permissions::can_lend(actor.user_id, &book) {
            return Err(AppError::Forbidden(
                "Only the owner may see this book's loans".to_string(),
            ));
        }

        self.repository.loans.list_for_book(book_id).await
    }
}
