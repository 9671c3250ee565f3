//! Handlers for the `/assessments` resource.
//!
//! Authorization is decided by `skillreel_core::lifecycle` against the
//! caller's resolved permissions; the repository re-checks the expected
//! prior status in its WHERE clauses so racing transitions settle to one
//! winner.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use skillreel_core::error::CoreError;
use skillreel_core::lifecycle::{
    self, AssessmentStatus, ListScope, Transition, UpdatePlan, UpdateTouches,
};
use skillreel_core::permissions::PERM_ASSESSMENT_CREATE;
use skillreel_core::types::DbId;
use skillreel_core::verdict::{validate_integrity_status, validate_proctor_rating};
use skillreel_db::models::assessment::{
    Assessment, AssessmentDetail, SubmitAssessment, UpdateAssessment, VerifyAssessment,
};
use skillreel_db::repositories::{AssessmentRepo, SkillRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::permissions::CurrentUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /assessments`.
#[derive(Debug, Deserialize)]
pub struct SubmitAssessmentRequest {
    pub skill_id: Option<DbId>,
    pub video_url: Option<String>,
}

/// Request body for `POST /assessments/{id}/proctor-verify`.
#[derive(Debug, Deserialize)]
pub struct VerifyAssessmentRequest {
    pub proctor_rating: Option<f64>,
    pub proctor_comments: Option<String>,
    pub integrity_status: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/assessments
///
/// Submit a recording for assessment. The record starts in
/// `pending_AI_analysis` and a scoring job is enqueued in the same
/// transaction.
pub async fn submit_assessment(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(input): Json<SubmitAssessmentRequest>,
) -> AppResult<(StatusCode, Json<Assessment>)> {
    user.permissions.require(PERM_ASSESSMENT_CREATE)?;

    let (Some(skill_id), Some(video_url)) = (input.skill_id, input.video_url) else {
        return Err(AppError::BadRequest(
            "skill_id and video_url are required.".into(),
        ));
    };
    if video_url.trim().is_empty() {
        return Err(AppError::BadRequest(
            "skill_id and video_url are required.".into(),
        ));
    }

    if SkillRepo::find_by_id(&state.pool, skill_id).await?.is_none() {
        return Err(AppError::BadRequest(format!("Unknown skill_id: {skill_id}")));
    }

    let assessment = AssessmentRepo::create(
        &state.pool,
        user.user_id,
        &SubmitAssessment {
            skill_id,
            video_url,
        },
        state.config.scoring.delay_secs,
    )
    .await?;

    tracing::info!(
        assessment_id = assessment.id,
        candidate_id = user.user_id,
        skill_id,
        "Assessment submitted"
    );

    Ok((StatusCode::CREATED, Json(assessment)))
}

/// GET /api/v1/assessments
///
/// List assessments, newest first, scoped to what the caller's
/// permissions allow: everything, verified only, or their own.
pub async fn list_assessments(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<AssessmentDetail>>> {
    let scope = lifecycle::list_scope(&user.permissions)?;
    let rows = match scope {
        ListScope::All => AssessmentRepo::list_all(&state.pool).await?,
        ListScope::VerifiedOnly => AssessmentRepo::list_verified(&state.pool).await?,
        ListScope::Own => AssessmentRepo::list_by_candidate(&state.pool, user.user_id).await?,
    };
    Ok(Json(rows))
}

/// GET /api/v1/assessments/{id}
///
/// Fetch one assessment with skill and candidate names joined.
pub async fn get_assessment(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<AssessmentDetail>> {
    let detail = AssessmentRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Assessment",
            id,
        })?;

    let status =
        AssessmentStatus::from_str_value(&detail.status).map_err(CoreError::Internal)?;

    if !lifecycle::can_view(user.user_id, &user.permissions, detail.candidate_id, status) {
        return Err(AppError::Core(CoreError::Forbidden("Access denied".into())));
    }

    Ok(Json(detail))
}

/// PUT /api/v1/assessments/{id}
///
/// Generic update. `plan_update` decides what the payload may touch:
/// owners replace their own fields in place, verifiers are routed
/// through the verify transition, everything else is rejected.
pub async fn update_assessment(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAssessment>,
) -> AppResult<Json<Assessment>> {
    let status = match input.status.as_deref() {
        Some(s) => {
            Some(AssessmentStatus::from_str_value(s).map_err(CoreError::Validation)?)
        }
        None => None,
    };
    let touches = UpdateTouches {
        own: input.video_url.is_some(),
        ai: input.ai_rating.is_some() || input.ai_feedback.is_some(),
        proctor: input.proctor_rating.is_some()
            || input.proctor_comments.is_some()
            || input.integrity_status.is_some(),
        status,
    };

    let current = AssessmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Assessment",
            id,
        })?;

    let is_owner = current.candidate_id == user.user_id;
    let plan = lifecycle::plan_update(&touches, &user.permissions, is_owner)?;

    let updated = match plan {
        UpdatePlan::OwnFields => {
            let video_url = input.video_url.ok_or_else(|| {
                CoreError::Validation("No updatable fields provided".to_string())
            })?;
            AssessmentRepo::update_video_url(&state.pool, id, user.user_id, &video_url)
                .await?
                .ok_or(CoreError::NotFound {
                    entity: "Assessment",
                    id,
                })?
        }
        UpdatePlan::Verify => {
            let current_status =
                AssessmentStatus::from_str_value(&current.status).map_err(CoreError::Internal)?;
            lifecycle::check_transition(current_status, Transition::Verify)?;

            let proctor_rating = input.proctor_rating.ok_or_else(|| {
                CoreError::Validation("proctor_rating is required for verification".to_string())
            })?;
            let integrity_status = input.integrity_status.ok_or_else(|| {
                CoreError::Validation("integrity_status is required for verification".to_string())
            })?;
            validate_proctor_rating(proctor_rating).map_err(CoreError::Validation)?;
            validate_integrity_status(&integrity_status).map_err(CoreError::Validation)?;

            AssessmentRepo::verify(
                &state.pool,
                id,
                user.user_id,
                &VerifyAssessment {
                    proctor_rating,
                    proctor_comments: input.proctor_comments,
                    integrity_status,
                },
            )
            .await?
            .ok_or_else(|| {
                CoreError::Conflict(
                    "Assessment was already verified by another proctor".to_string(),
                )
            })?
        }
    };

    tracing::info!(assessment_id = id, "Assessment updated");
    Ok(Json(updated))
}

/// POST /api/v1/assessments/{id}/request-proctor
///
/// Candidate asks a human proctor to review the AI result. Only valid
/// from `AI_rated`, only for the owner.
pub async fn request_proctor(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Assessment>> {
    let current = AssessmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Assessment",
            id,
        })?;

    lifecycle::authorize(Transition::RequestProctor, &user.actor(), current.candidate_id)?;

    let status =
        AssessmentStatus::from_str_value(&current.status).map_err(CoreError::Internal)?;
    lifecycle::check_transition(status, Transition::RequestProctor)?;

    let updated = AssessmentRepo::request_proctor(&state.pool, id, user.user_id)
        .await?
        .ok_or_else(|| {
            CoreError::Conflict("Assessment status changed concurrently".to_string())
        })?;

    tracing::info!(
        assessment_id = id,
        candidate_id = user.user_id,
        "Proctor review requested"
    );

    Ok(Json(updated))
}

/// POST /api/v1/assessments/{id}/proctor-verify
///
/// Proctor issues a verdict: rating, optional comments, and an
/// integrity status. Only valid from `proctor_requested`; of two racing
/// verifications exactly one wins.
pub async fn verify_assessment(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<DbId>,
    Json(input): Json<VerifyAssessmentRequest>,
) -> AppResult<Json<Assessment>> {
    let (Some(proctor_rating), Some(integrity_status)) =
        (input.proctor_rating, input.integrity_status)
    else {
        return Err(AppError::BadRequest(
            "proctor_rating and integrity_status are required.".into(),
        ));
    };

    let current = AssessmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Assessment",
            id,
        })?;

    lifecycle::authorize(Transition::Verify, &user.actor(), current.candidate_id)?;

    validate_proctor_rating(proctor_rating).map_err(CoreError::Validation)?;
    validate_integrity_status(&integrity_status).map_err(CoreError::Validation)?;

    let status =
        AssessmentStatus::from_str_value(&current.status).map_err(CoreError::Internal)?;
    lifecycle::check_transition(status, Transition::Verify)?;

    let updated = AssessmentRepo::verify(
        &state.pool,
        id,
        user.user_id,
        &VerifyAssessment {
            proctor_rating,
            proctor_comments: input.proctor_comments,
            integrity_status,
        },
    )
    .await?
    .ok_or_else(|| {
        CoreError::Conflict("Assessment was already verified by another proctor".to_string())
    })?;

    tracing::info!(
        assessment_id = id,
        proctor_id = user.user_id,
        "Assessment verified"
    );

    Ok(Json(updated))
}
