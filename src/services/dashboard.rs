//! Dashboard service: per-user catalog summary

use crate::{
    api::dashboard::DashboardResponse,
    error::AppResult,
    models::user::UserClaims,
    repository::Repository,
};

const RECENT_BOOKS: i64 = 5;

#[derive(Clone)]
pub struct DashboardService {
    repository: Repository,
}

impl DashboardService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Summary of the acting user's library
    pub async fn dashboard(&self, actor: &UserClaims) -> AppResult<DashboardResponse> {
        let total_books = self.repository.books.count_for_owner(actor.user_id).await?;
        let recent_books = self
            .repository
            .books
            .recent_for_owner(actor.user_id, RECENT_BOOKS)
            .await?;
        let wishlist_count = self.repository.wishlist.count_for_user(actor.user_id).await?;

        Ok(DashboardResponse {
            total_books,
            recent_books,
            wishlist_count,
        })
    }
}
