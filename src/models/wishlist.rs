//! Wishlist model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Desired future acquisition. Not related to any owned Book.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WishlistItem {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub notes: Option<String>,
    /// 1 = low, 2 = medium, 3 = high
    pub priority: i32,
    pub created_at: DateTime<Utc>,
}

/// Add wishlist item request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateWishlistItem {
    #[validate(length(min = 1, max = 300, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, max = 200, message = "Author is required"))]
    pub author: String,
    #[validate(length(max = 13, message = "ISBN must be at most 13 characters"))]
    pub isbn: Option<String>,
    pub notes: Option<String>,
    #[validate(range(min = 1, max = 3, message = "Priority must be between 1 and 3"))]
    pub priority: Option<i32>,
}
