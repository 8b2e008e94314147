//! Book model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::loan::Loan;
use super::review::Review;

/// Physical condition of an owned book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    New,
    LikeNew,
    UsedGood,
    UsedAcceptable,
    Worn,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::LikeNew => "like_new",
            Condition::UsedGood => "used_good",
            Condition::UsedAcceptable => "used_acceptable",
            Condition::Worn => "worn",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(Condition::New),
            "like_new" => Ok(Condition::LikeNew),
            "used_good" => Ok(Condition::UsedGood),
            "used_acceptable" => Ok(Condition::UsedAcceptable),
            "worn" => Ok(Condition::Worn),
            _ => Err(format!("Invalid condition: {}", s)),
        }
    }
}

impl sqlx::Type<Postgres> for Condition {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for Condition {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for Condition {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        <String as Encode<Postgres>>::encode(self.as_str().to_string(), buf)
    }
}

/// Publication format of an owned book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BookFormat {
    Hardcover,
    Paperback,
    Pocket,
    Ebook,
    Audiobook,
}

impl BookFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookFormat::Hardcover => "hardcover",
            BookFormat::Paperback => "paperback",
            BookFormat::Pocket => "pocket",
            BookFormat::Ebook => "ebook",
            BookFormat::Audiobook => "audiobook",
        }
    }
}

impl std::fmt::Display for BookFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BookFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hardcover" => Ok(BookFormat::Hardcover),
            "paperback" => Ok(BookFormat::Paperback),
            "pocket" => Ok(BookFormat::Pocket),
            "ebook" => Ok(BookFormat::Ebook),
            "audiobook" => Ok(BookFormat::Audiobook),
            _ => Err(format!("Invalid format: {}", s)),
        }
    }
}

impl sqlx::Type<Postgres> for BookFormat {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for BookFormat {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for BookFormat {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        <String as Encode<Postgres>>::encode(self.as_str().to_string(), buf)
    }
}

/// Book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub publisher: Option<String>,
    pub publication_year: Option<i32>,
    pub description: Option<String>,
    /// Reference to the cover image; upload mechanics live in the frontend
    pub cover_path: Option<String>,
    pub page_count: Option<i32>,
    pub owner_id: i32,
    pub condition: Condition,
    pub format: BookFormat,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Book with review, loan history and viewer context
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookDetails {
    pub book: Book,
    pub review: Option<Review>,
    pub loans: Vec<Loan>,
    pub is_owner: bool,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, max = 300, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, max = 200, message = "Author is required"))]
    pub author: String,
    #[validate(length(max = 13, message = "ISBN must be at most 13 characters"))]
    pub isbn: Option<String>,
    pub publisher: Option<String>,
    #[validate(range(min = 1000, max = 2100, message = "Publication year must be between 1000 and 2100"))]
    pub publication_year: Option<i32>,
    pub description: Option<String>,
    pub cover_path: Option<String>,
    #[validate(range(min = 1, message = "Page count must be positive"))]
    pub page_count: Option<i32>,
    pub condition: Option<Condition>,
    pub format: Option<BookFormat>,
}

/// Partial update request; absent fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, max = 300, message = "Title must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 200, message = "Author must not be empty"))]
    pub author: Option<String>,
    #[validate(length(max = 13, message = "ISBN must be at most 13 characters"))]
    pub isbn: Option<String>,
    pub publisher: Option<String>,
    #[validate(range(min = 1000, max = 2100, message = "Publication year must be between 1000 and 2100"))]
    pub publication_year: Option<i32>,
    pub description: Option<String>,
    pub cover_path: Option<String>,
    #[validate(range(min = 1, message = "Page count must be positive"))]
    pub page_count: Option<i32>,
    pub condition: Option<Condition>,
    pub format: Option<BookFormat>,
}

/// Catalog search parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct BookQuery {
    /// Case-insensitive substring match over title, author and ISBN
    pub query: Option<String>,
}
