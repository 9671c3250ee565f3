//! Handlers for the `/proctor` resource (review queues).

use axum::extract::State;
use axum::Json;
use skillreel_core::permissions::{PERM_ASSESSMENT_READ_PENDING, PERM_ASSESSMENT_VERIFY};
use skillreel_db::models::assessment::AssessmentDetail;
use skillreel_db::repositories::AssessmentRepo;

use crate::error::AppResult;
use crate::middleware::permissions::CurrentUser;
use crate::state::AppState;

/// GET /api/v1/proctor/requests/pending
///
/// The queue of assessments awaiting proctor review, oldest request
/// first so the queue drains fairly.
pub async fn pending_requests(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<AssessmentDetail>>> {
    user.permissions.require(PERM_ASSESSMENT_READ_PENDING)?;
    let rows = AssessmentRepo::list_pending_requests(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/v1/proctor/verifications
///
/// Assessments the calling proctor has verified, most recent first.
pub async fn my_verifications(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<AssessmentDetail>>> {
    user.permissions.require(PERM_ASSESSMENT_VERIFY)?;
    let rows = AssessmentRepo::list_verified_by(&state.pool, user.user_id).await?;
    Ok(Json(rows))
}
