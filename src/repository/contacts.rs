//! Contact requests repository for database operations

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::contact::ContactRequest};

#[derive(Clone)]
pub struct ContactsRepository {
    pool: Pool<Postgres>,
}

impl ContactsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Record a new contact request; status starts as pending
    pub async fn create(
        &self,
        visitor_id: i32,
        librarian_id: i32,
        book_id: Option<i32>,
        message: &str,
    ) -> AppResult<ContactRequest> {
        let created = sqlx::query_as::<_, ContactRequest>(
            r#"
            INSERT INTO contact_requests (visitor_id, librarian_id, book_id, message, status)
            VALUES ($1, $2, $3, $4, 'pending')
            RETURNING *
            "#,
        )
        .bind(visitor_id)
        .bind(librarian_id)
        .bind(book_id)
        .bind(message)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Requests addressed to a user, newest first
    pub async fn list_received(&self, user_id: i32) -> AppResult<Vec<ContactRequest>> {
        let requests = sqlx::query_as::<_, ContactRequest>(
            "SELECT * FROM contact_requests WHERE librarian_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(requests)
    }

    /// Requests sent by a user, newest first
    pub async fn list_sent(&self, user_id: i32) -> AppResult<Vec<ContactRequest>> {
        let requests = sqlx::query_as::<_, ContactRequest>(
            "SELECT * FROM contact_requests WHERE visitor_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(requests)
    }
}
