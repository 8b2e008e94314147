//! Catalog management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BookDetails, CreateBook, UpdateBook},
        user::{PublicOwner, UserClaims},
    },
    permissions,
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a book owned by the acting user
    pub async fn create_book(&self, actor: &UserClaims, book: CreateBook) -> AppResult<Book> {
        book.validate()?;
        let created = self.repository.books.create(actor.user_id, &book).await?;
        tracing::info!(
            "User {} added book \"{}\" (id={})",
            actor.user_id,
            created.title,
            created.id
        );
        Ok(created)
    }

    /// Get a book with its review and loan history.
    /// Visible to the owner and, for public catalogs, to everyone;
    /// loans stay owner-only.
    pub async fn get_book_details(&self, actor: &UserClaims, id: i32) -> AppResult<BookDetails> {
        let book = self.repository.books.get_by_id(id).await?;
        let owner = self.repository.users.get_by_id(book.owner_id).await?;

        if !permissions::can_view_catalog(actor.user_id, &owner) {
            return Err(AppError::Forbidden(
                "This catalog is private".to_string(),
            ));
        }

        let is_owner = permissions::can_mutate_book(actor.user_id, &book);
        let review = self.repository.reviews.get_for_book(id).await?;
        let loans = if is_owner {
            self.repository.loans.list_for_book(id).await?
        } else {
            Vec::new()
        };

        Ok(BookDetails {
            book,
            review,
            loans,
            is_owner,
        })
    }

    /// Update a book; only its owner may do so
    pub async fn update_book(
        &self,
        actor: &UserClaims,
        id: i32,
        update: UpdateBook,
    ) -> AppResult<Book> {
        update.validate()?;

        let book = self.repository.books.get_by_id(id).await?;
        if !permissions::can_mutate_book(actor.user_id, &book) {
            return Err(AppError::Forbidden(
                "Only the owner may edit this book".to_string(),
            ));
        }

        self.repository.books.update(id, &update).await
    }

    /// Delete a book and its dependents; only its owner may do so
    pub async fn delete_book(&self, actor: &UserClaims, id: i32) -> AppResult<()> {
        let book = self.repository.books.get_by_id(id).await?;
        if !permissions::can_mutate_book(actor.user_id, &book) {
            return Err(AppError::Forbidden(
                "Only the owner may delete this book".to_string(),
            ));
        }

        self.repository.books.delete_cascading(id).await?;
        tracing::info!("User {} deleted book \"{}\" (id={})", actor.user_id, book.title, id);
        Ok(())
    }

    /// Browse a user's catalog by username, with optional search
    pub async fn browse_catalog(
        &self,
        actor: &UserClaims,
        username: &str,
        query: Option<&str>,
    ) -> AppResult<Vec<Book>> {
        let owner = self
            .repository
            .users
            .get_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", username)))?;

        if !permissions::can_view_catalog(actor.user_id, &owner) {
            return Err(AppError::Forbidden(
                "This catalog is private".to_string(),
            ));
        }

        self.repository.books.search(owner.id, query).await
    }

    /// The acting user's own catalog, with optional search
    pub async fn my_catalog(&self, actor: &UserClaims, query: Option<&str>) -> AppResult<Vec<Book>> {
        self.repository.books.search(actor.user_id, query).await
    }

    /// Public catalog owners with book counts, excluding the requester
    pub async fn list_public_owners(&self, actor: &UserClaims) -> AppResult<Vec<PublicOwner>> {
        self.repository.users.list_public_owners(actor.user_id).await
    }
}
