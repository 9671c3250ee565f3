//! Handlers for the `/skills` resource.

use axum::extract::State;
use axum::Json;
use skillreel_core::permissions::PERM_SKILL_READ;
use skillreel_db::models::skill::Skill;
use skillreel_db::repositories::SkillRepo;

use crate::error::AppResult;
use crate::middleware::permissions::CurrentUser;
use crate::state::AppState;

/// GET /api/v1/skills
///
/// List every skill available for assessment, name-ordered.
pub async fn list_skills(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<Skill>>> {
    user.permissions.require(PERM_SKILL_READ)?;
    let skills = SkillRepo::list(&state.pool).await?;
    Ok(Json(skills))
}
