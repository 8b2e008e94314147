//! Administration service

use crate::{
    error::AppResult,
    models::user::{User, UserClaims, UserWithBookCount},
    repository::Repository,
};

#[derive(Clone)]
pub struct AdminService {
    repository: Repository,
}

impl AdminService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All users with owned-book counts; admin only
    pub async fn list_users_with_counts(
        &self,
        actor: &UserClaims,
    ) -> AppResult<Vec<UserWithBookCount>> {
        actor.require_admin()?;
        self.repository.users.list_with_book_counts().await
    }

    /// Flip another user's catalog visibility; admin only
    pub async fn toggle_catalog_visibility(
        &self,
        actor: &UserClaims,
        user_id: i32,
    ) -> AppResult<User> {
        actor.require_admin()?;
        let user = self.repository.users.toggle_catalog_public(user_id).await?;
        tracing::info!(
            "Admin {} set catalog of user {} to {}",
            actor.user_id,
            user.id,
            if user.catalog_public { "public" } else { "private" }
        );
        Ok(user)
    }

    /// Flip the acting user's own catalog visibility
    pub async fn toggle_own_visibility(&self, actor: &UserClaims) -> AppResult<User> {
        self.repository
            .users
            .toggle_catalog_public(actor.user_id)
            .await
    }
}
