//! Pure ownership and role rules.
//!
//! Every mutation elsewhere in the crate funnels through these predicates;
//! a `false` answer surfaces as `AppError::Forbidden`, which is kept
//! distinct from `NotFound`.

use crate::models::{Book, Role, User};

/// A catalog is visible to its owner and, when flagged public, to everyone.
pub fn can_view_catalog(viewer_id: i32, owner: &User) -> bool {
    viewer_id == owner.id || owner.catalog_public
}

/// Only the owner may mutate a book.
pub fn can_mutate_book(actor_id: i32, book: &Book) -> bool {
    actor_id == book.owner_id
}

/// Reviews follow the same ownership rule as book mutation.
pub fn can_review(actor_id: i32, book: &Book) -> bool {
    can_mutate_book(actor_id, book)
}

/// Loans follow the same ownership rule as book mutation.
pub fn can_lend(actor_id: i32, book: &Book) -> bool {
    can_mutate_book(actor_id, book)
}

/// Administrative operations are reserved to admins.
pub fn can_administer(role: Role) -> bool {
    match role {
        Role::Admin => true,
        Role::Librarian | Role::Visitor => false,
    }
}
