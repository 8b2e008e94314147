//! Contact request model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::ToSchema;
use validator::Validate;

/// Contact request lifecycle status.
/// Only `pending` is reachable through the API; the column is kept for
/// parity with the stored model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Pending,
    Answered,
    Closed,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::Pending => "pending",
            ContactStatus::Answered => "answered",
            ContactStatus::Closed => "closed",
        }
    }
}

impl std::fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ContactStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ContactStatus::Pending),
            "answered" => Ok(ContactStatus::Answered),
            "closed" => Ok(ContactStatus::Closed),
            _ => Err(format!("Invalid contact status: {}", s)),
        }
    }
}

impl sqlx::Type<Postgres> for ContactStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for ContactStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for ContactStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        <String as Encode<Postgres>>::encode(self.as_str().to_string(), buf)
    }
}

/// Message from a visiting user to a book's owner.
/// The book reference is nulled out when the book is deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ContactRequest {
    pub id: i32,
    pub visitor_id: i32,
    pub librarian_id: i32,
    pub book_id: Option<i32>,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

/// Create contact request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateContactRequest {
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}
