//! Review model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Personal review of an owned book.
/// A book has at most one review (unique index on book_id).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Review {
    pub id: i32,
    pub book_id: i32,
    /// Score from 1 to 5
    pub score: i32,
    pub comment: String,
    pub read_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create-or-update review request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertReview {
    #[validate(range(min = 1, max = 5, message = "Score must be between 1 and 5"))]
    pub score: i32,
    pub comment: String,
    pub read_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn score_must_be_between_one_and_five() {
        for score in [0, 6, -1, 100] {
            let review = UpsertReview {
                score,
                comment: "out of range".into(),
                read_date: None,
            };
            assert!(review.validate().is_err(), "score {} accepted", score);
        }
        for score in 1..=5 {
            let review = UpsertReview {
                score,
                comment: "in range".into(),
                read_date: None,
            };
            assert!(review.validate().is_ok(), "score {} rejected", score);
        }
    }
}
