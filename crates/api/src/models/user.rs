//! User domain types.

use multibase_core::{Email, UserId};

/// A registered user (domain type), backed by a `PostgreSQL` row.
///
/// Soft-deleted users keep their row; `is_active` is the only thing that
/// changes. Every read path filters on it.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID, generated by the database.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address, unique across all users. Case-sensitive as stored.
    pub email: Email,
    /// Password as provided at signup. Stored in clear; nothing in this
    /// service hashes it, and no response type ever serializes it.
    pub password: String,
    /// Visibility flag. False means soft-deleted.
    pub is_active: bool,
}
