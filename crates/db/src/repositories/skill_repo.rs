//! Repository for the `skills` table.

use skillreel_core::types::DbId;
use sqlx::PgPool;

use crate::models::skill::Skill;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at";

/// Provides read operations for skills.
pub struct SkillRepo;

impl SkillRepo {
    /// Find a skill by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE id = $1");
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all skills ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills ORDER BY name ASC");
        sqlx::query_as::<_, Skill>(&query).fetch_all(pool).await
    }
}
