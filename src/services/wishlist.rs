//! Wishlist service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        user::UserClaims,
        wishlist::{CreateWishlistItem, WishlistItem},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct WishlistService {
    repository: Repository,
}

impl WishlistService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// The acting user's wishlist, priority high to low
    pub async fn list_items(&self, actor: &UserClaims) -> AppResult<Vec<WishlistItem>> {
        self.repository.wishlist.list_for_user(actor.user_id).await
    }

    /// Add an item to the acting user's wishlist
    pub async fn add_item(
        &self,
        actor: &UserClaims,
        item: CreateWishlistItem,
    ) -> AppResult<WishlistItem> {
        item.validate()?;
        self.repository.wishlist.create(actor.user_id, &item).await
    }

    /// Remove an item; it must belong to the acting user
    pub async fn remove_item(&self, actor: &UserClaims, item_id: i32) -> AppResult<()> {
        let item = self.repository.wishlist.get_by_id(item_id).await?;
        if item.user_id != actor.user_id {
            return Err(AppError::Forbidden(
                "This wishlist item belongs to another user".to_string(),
            ));
        }

        self.repository.wishlist.delete(item_id).await
    }
}
