//! Row and DTO types for user accounts.

use serde::{Deserialize, Serialize};
use skillreel_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A complete `users` row, password hash included.
///
/// NEVER serialize this to an API response; hand out [`UserProfile`]
/// instead.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role_id: DbId,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash), with the
/// role name resolved.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Resolved role name (e.g. `"candidate"`, `"proctor"`).
    pub role: String,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// Insert payload for a new account. The hash is produced by the API
/// layer; this crate never sees plaintext passwords.
#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role_id: DbId,
}

/// DTO for a profile update. All fields are optional; `None` leaves the
/// column untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfile {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
