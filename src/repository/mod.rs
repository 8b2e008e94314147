//! Repository layer for database operations

pub mod books;
pub mod contacts;
pub mod loans;
pub mod reviews;
pub mod users;
pub mod wishlist;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub users: users::UsersRepository,
    pub books: books::BooksRepository,
    pub reviews: reviews::ReviewsRepository,
    pub loans: loans::LoansRepository,
    pub wishlist: wishlist::WishlistRepository,
    pub contacts: contacts::ContactsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: users::UsersRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            reviews: reviews::ReviewsRepository::new(pool.clone()),
            loans: loans::LoansRepository::new(pool.clone()),
            wishlist: wishlist::WishlistRepository::new(pool.clone()),
            contacts: contacts::ContactsRepository::new(pool.clone()),
            pool,
        }
    }
}
