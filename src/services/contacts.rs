//! Contact request service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        contact::{ContactRequest, CreateContactRequest},
        user::UserClaims,
    },
    permissions,
    repository::Repository,
};

#[derive(Clone)]
pub struct ContactsService {
    repository: Repository,
}

impl ContactsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Send a contact request to a book's owner. Only non-owners who can
    /// see the book may do so; the request starts as pending.
    pub async fn create_request(
        &self,
        actor: &UserClaims,
        book_id: i32,
        request: CreateContactRequest,
    ) -> AppResult<ContactRequest> {
        request.validate()?;

        let book = self.repository.books.get_by_id(book_id).await?;
        if permissions::can_mutate_book(actor.user_id, &book) {
            return Err(AppError::Forbidden(
                "You cannot send a contact request about your own book".to_string(),
            ));
        }

        let owner = self.repository.users.get_by_id(book.owner_id).await?;
        if !permissions::can_view_catalog(actor.user_id, &owner) {
            return Err(AppError::Forbidden(
                "This catalog is private".to_string(),
            ));
        }

        self.repository
            .contacts
            .create(actor.user_id, owner.id, Some(book.id), &request.message)
            .await
    }

    /// Requests addressed to the acting user
    pub async fn list_received(&self, actor: &UserClaims) -> AppResult<Vec<ContactRequest>> {
        self.repository.contacts.list_received(actor.user_id).await
    }

    /// Requests sent by the acting user
    pub async fn list_sent(&self, actor: &UserClaims) -> AppResult<Vec<ContactRequest>> {
        self.repository.contacts.list_sent(actor.user_id).await
    }
}
