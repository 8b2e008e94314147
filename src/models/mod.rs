//! Data models for Bibliandria entities

pub mod book;
pub mod contact;
pub mod loan;
pub mod review;
pub mod user;
pub mod wishlist;

pub use book::{Book, BookDetails, BookFormat, BookQuery, Condition, CreateBook, UpdateBook};
pub use contact::{ContactRequest, ContactStatus, CreateContactRequest};
pub use loan::{CreateLoan, Loan};
pub use review::{Review, UpsertReview};
pub use user::{PublicOwner, Register, Role, User, UserClaims, UserWithBookCount};
pub use wishlist::{CreateWishlistItem, WishlistItem};
