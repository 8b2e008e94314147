//! Users repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::user::{PublicOwner, Register, Role, User, UserWithBookCount},
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// Get user by username, if present
    pub async fn get_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Check whether a username is already taken
    pub async fn username_exists(&self, username: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
                .bind(username)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Create a new user with the given role and password hash
    pub async fn create(
        &self,
        registration: &Register,
        password_hash: &str,
        role: Role,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, firstname, lastname, password, role, catalog_public)
            VALUES ($1, $2, $3, $4, $5, $6, FALSE)
            RETURNING *
            "#,
        )
        .bind(&registration.username)
        .bind(&registration.email)
        .bind(&registration.firstname)
        .bind(&registration.lastname)
        .bind(password_hash)
        .bind(role)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// All users annotated with owned-book counts (admin listing)
    pub async fn list_with_book_counts(&self) -> AppResult<Vec<UserWithBookCount>> {
        let users = sqlx::query_as::<_, UserWithBookCount>(
            r#"
            SELECT u.id, u.username, u.email, u.firstname, u.lastname,
                   u.role, u.catalog_public, u.registered_at,
                   COUNT(b.id) AS book_count
            FROM users u
            LEFT JOIN books b ON b.owner_id = u.id
            GROUP BY u.id
            ORDER BY u.username
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Librarians with a public catalog, excluding the requester
    pub async fn list_public_owners(&self, exclude_id: i32) -> AppResult<Vec<PublicOwner>> {
        let owners = sqlx::query_as::<_, PublicOwner>(
            r#"
            SELECT u.id, u.username, u.firstname, u.lastname,
                   COUNT(b.id) AS book_count
            FROM users u
            LEFT JOIN books b ON b.owner_id = u.id
            WHERE u.catalog_public = TRUE
              AND u.role = 'librarian'
              AND u.id <> $1
            GROUP BY u.id
            ORDER BY u.username
            "#,
        )
        .bind(exclude_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(owners)
    }

    /// Flip catalog_public and return the updated user
    pub async fn toggle_catalog_public(&self, id: i32) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET catalog_public = NOT catalog_public WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }
}
