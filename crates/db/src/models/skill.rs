//! Skill entity model.

use serde::Serialize;
use skillreel_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A skill row from the `skills` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}
