//! Role entity model.

use skillreel_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `roles` table.
///
/// Roles are seeded by migration and never created through the API; the
/// row mostly serves to resolve `users.role_id` to a name.
#[derive(Debug, Clone, FromRow)]
pub struct Role {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
