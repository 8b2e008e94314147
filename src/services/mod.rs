//! Business logic services

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod contacts;
pub mod dashboard;
pub mod lending;
pub mod reviews;
pub mod wishlist;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub catalog: catalog::CatalogService,
    pub lending: lending::LendingService,
    pub reviews: reviews::ReviewsService,
    pub wishlist: wishlist::WishlistService,
    pub contacts: contacts::ContactsService,
    pub admin: admin::AdminService,
    pub dashboard: dashboard::DashboardService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            catalog: catalog::CatalogService::new(repository.clone()),
            lending: lending::LendingService::new(repository.clone()),
            reviews: reviews::ReviewsService::new(repository.clone()),
            wishlist: wishlist::WishlistService::new(repository.clone()),
            contacts: contacts::ContactsService::new(repository.clone()),
            admin: admin::AdminService::new(repository.clone()),
            dashboard: dashboard::DashboardService::new(repository),
        }
    }
}
