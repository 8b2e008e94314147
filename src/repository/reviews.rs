//! Reviews repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::review::{Review, UpsertReview},
};

#[derive(Clone)]
pub struct ReviewsRepository {
    pool: Pool<Postgres>,
}

impl ReviewsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get the review for a book, if any
    pub async fn get_for_book(&self, book_id: i32) -> AppResult<Option<Review>> {
        let review = sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE book_id = $1")
            .bind(book_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(review)
    }

    /// Create the book's review or update it in place.
    /// The unique index on book_id enforces the one-review-per-book
    /// invariant at the storage layer.
    pub async fn upsert(&self, book_id: i32, review: &UpsertReview) -> AppResult<Review> {
        let saved = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (book_id, score, comment, read_date)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (book_id) DO UPDATE
            SET score = EXCLUDED.score,
                comment = EXCLUDED.comment,
                read_date = EXCLUDED.read_date,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(book_id)
        .bind(review.score)
        .bind(&review.comment)
        .bind(review.read_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }
}
