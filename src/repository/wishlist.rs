//! Wishlist repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::wishlist::{CreateWishlistItem, WishlistItem},
};

#[derive(Clone)]
pub struct WishlistRepository {
    pool: Pool<Postgres>,
}

impl WishlistRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get wishlist item by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<WishlistItem> {
        sqlx::query_as::<_, WishlistItem>("SELECT * FROM wishlist_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Wishlist item with id {} not found", id)))
    }

    /// A user's wishlist: priority high to low, then newest first
    pub async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<WishlistItem>> {
        let items = sqlx::query_as::<_, WishlistItem>(
            r#"
            SELECT * FROM wishlist_items
            WHERE user_id = $1
            ORDER BY priority DESC, created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    /// Add a wishlist item; priority defaults to medium (2)
    pub async fn create(&self, user_id: i32, item: &CreateWishlistItem) -> AppResult<WishlistItem> {
        let created = sqlx::query_as::<_, WishlistItem>(
            r#"
            INSERT INTO wishlist_items (user_id, title, author, isbn, notes, priority)
            VALUES ($1, $2, $3, $4, $5, COALESCE($6, 2))
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&item.title)
        .bind(&item.author)
        .bind(&item.isbn)
        .bind(&item.notes)
        .bind(item.priority)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Delete a wishlist item
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM wishlist_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Wishlist item with id {} not found",
                id
            )));
        }
        Ok(())
    }

    /// Count items on a user's wishlist
    pub async fn count_for_user(&self, user_id: i32) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM wishlist_items WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
