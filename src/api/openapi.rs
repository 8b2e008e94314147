//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, books, contacts, dashboard, health, loans, reviews, users, wishlist};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bibliandria API",
        version = "0.1.0",
        description = "Personal Library Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::register,
        auth::login,
        auth::me,
        // Books
        books::list_my_books,
        books::browse_catalog,
        books::list_public_owners,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Reviews
        reviews::upsert_review,
        // Loans
        loans::list_loans,
        loans::create_loan,
        loans::return_loan,
        // Wishlist
        wishlist::list_items,
        wishlist::add_item,
        wishlist::remove_item,
        // Contacts
        contacts::create_request,
        contacts::list_received,
        contacts::list_sent,
        // Users
        users::list_users,
        users::toggle_user_visibility,
        users::toggle_own_visibility,
        // Dashboard
        dashboard::dashboard,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::AuthResponse,
            // Users
            crate::models::user::User,
            crate::models::user::Role,
            crate::models::user::Register,
            crate::models::user::PublicOwner,
            crate::models::user::UserWithBookCount,
            // Books
            crate::models::book::Book,
            crate::models::book::BookDetails,
            crate::models::book::BookQuery,
            crate::models::book::Condition,
            crate::models::book::BookFormat,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            // Reviews
            crate::models::review::Review,
            crate::models::review::UpsertReview,
            // Loans
            crate::models::loan::Loan,
            crate::models::loan::CreateLoan,
            // Wishlist
            crate::models::wishlist::WishlistItem,
            crate::models::wishlist::CreateWishlistItem,
            // Contacts
            crate::models::contact::ContactRequest,
            crate::models::contact::ContactStatus,
            crate::models::contact::CreateContactRequest,
            // Dashboard
            dashboard::DashboardResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "books", description = "Personal catalog management"),
        (name = "reviews", description = "Book reviews"),
        (name = "loans", description = "Loan tracking"),
        (name = "wishlist", description = "Acquisition wishlist"),
        (name = "contacts", description = "Contact requests between users"),
        (name = "users", description = "User administration"),
        (name = "dashboard", description = "Library summary")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
