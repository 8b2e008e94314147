//! Review service: one review per owned book

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        review::{Review, UpsertReview},
        user::UserClaims,
    },
    permissions,
    repository::Repository,
};

#[derive(Clone)]
pub struct ReviewsService {
    repository: Repository,
}

impl ReviewsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create the book's review, or update the existing one in place.
    /// Only the book's owner may review it.
    pub async fn upsert_review(
        &self,
        actor: &UserClaims,
        book_id: i32,
        review: UpsertReview,
    ) -> AppResult<Review> {
        review.validate()?;

        let book = self.repository.books.get_by_id(book_id).await?;
        if !permissions::can_review(actor.user_id, &book) {
            return Err(AppError::Forbidden(
                "Only the owner may review this book".to_string(),
            ));
        }

        self.repository.reviews.upsert(book_id, &review).await
    }
}
