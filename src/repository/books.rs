//! Books repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
};

/// Wrap a search query in ILIKE wildcards, escaping the LIKE
/// metacharacters so the query itself always matches literally.
fn like_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Create a new book owned by the given user
    pub async fn create(&self, owner_id: i32, book: &CreateBook) -> AppResult<Book> {
        let created = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, isbn, publisher, publication_year,
                               description, cover_path, page_count, owner_id,
                               condition, format)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9,
                    COALESCE($10, 'used_good'), COALESCE($11, 'paperback'))
            RETURNING *
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.isbn)
        .bind(&book.publisher)
        .bind(book.publication_year)
        .bind(&book.description)
        .bind(&book.cover_path)
        .bind(book.page_count)
        .bind(owner_id)
        .bind(book.condition)
        .bind(book.format)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Apply a partial update; absent fields keep their stored value
    pub async fn update(&self, id: i32, book: &UpdateBook) -> AppResult<Book> {
        let updated = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = COALESCE($2, title),
                author = COALESCE($3, author),
                isbn = COALESCE($4, isbn),
                publisher = COALESCE($5, publisher),
                publication_year = COALESCE($6, publication_year),
                description = COALESCE($7, description),
                cover_path = COALESCE($8, cover_path),
                page_count = COALESCE($9, page_count),
                condition = COALESCE($10, condition),
                format = COALESCE($11, format),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.isbn)
        .bind(&book.publisher)
        .bind(book.publication_year)
        .bind(&book.description)
        .bind(&book.cover_path)
        .bind(book.page_count)
        .bind(book.condition)
        .bind(book.format)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

        Ok(updated)
    }

    /// Delete a book together with its dependents, in one transaction.
    /// Deletion order is explicit so the cascade stays auditable:
    /// contact requests keep their row but lose the book reference,
    /// the review and loans go with the book.
    pub async fn delete_cascading(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE contact_requests SET book_id = NULL WHERE book_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM reviews WHERE book_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM loans WHERE book_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Case-insensitive substring search over title, author and ISBN.
    /// An empty query returns the owner's full catalog, newest first.
    pub async fn search(&self, owner_id: i32, query: Option<&str>) -> AppResult<Vec<Book>> {
        let books = match query.filter(|q| !q.trim().is_empty()) {
            Some(q) => {
                let pattern = like_pattern(q.trim());
                sqlx::query_as::<_, Book>(
                    r#"
                    SELECT * FROM books
                    WHERE owner_id = $1
                      AND (title ILIKE $2 OR author ILIKE $2 OR isbn ILIKE $2)
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(owner_id)
                .bind(pattern)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Book>(
                    "SELECT * FROM books WHERE owner_id = $1 ORDER BY created_at DESC",
                )
                .bind(owner_id)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(books)
    }

    /// Count books owned by a user
    pub async fn count_for_owner(&self, owner_id: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Most recently added books for a user
    pub async fn recent_for_owner(&self, owner_id: i32, limit: i64) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE owner_id = $1 ORDER BY created_at DESC LIMIT $2",
        )
        .bind(owner_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }
}
