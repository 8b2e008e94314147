//! Bibliandria Personal Library Management System
//!
//! A Rust implementation of the Bibliandria personal-library server,
//! providing a REST JSON API for cataloging owned books, tracking loans,
//! reviews, wishlists and contact requests between users.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod permissions;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    /// Kept alongside the services so readiness can ping the database
    pub pool: sqlx::Pool<sqlx::Postgres>,
}
