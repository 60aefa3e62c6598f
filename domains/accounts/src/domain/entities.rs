//! Domain entities for the Jobboard accounts domain

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// User entity
///
/// `password_hash` is an opaque PHC string and is never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Canonical form of an email address: trimmed and lowercased.
///
/// Applied on both registration and login so lookups are case-insensitive
/// and the unique constraint sees one spelling per address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
