//! Assessment entity model and DTOs.

use serde::{Deserialize, Serialize};
use skillreel_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// An assessment row from the `assessments` table.
///
/// `status` holds one of the four lifecycle strings from
/// `skillreel_core::lifecycle`; AI and proctor fields are `None` until the
/// corresponding transition writes them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assessment {
    pub id: DbId,
    pub candidate_id: DbId,
    pub skill_id: DbId,
    pub video_url: String,
    pub status: String,
    pub ai_rating: Option<f64>,
    pub ai_feedback: Option<String>,
    pub proctor_id: Option<DbId>,
    pub proctor_rating: Option<f64>,
    pub proctor_comments: Option<String>,
    pub integrity_status: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An assessment row joined with its skill and candidate names, the shape
/// returned by read endpoints.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssessmentDetail {
    pub id: DbId,
    pub candidate_id: DbId,
    pub skill_id: DbId,
    pub video_url: String,
    pub status: String,
    pub ai_rating: Option<f64>,
    pub ai_feedback: Option<String>,
    pub proctor_id: Option<DbId>,
    pub proctor_rating: Option<f64>,
    pub proctor_comments: Option<String>,
    pub integrity_status: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub skill_name: String,
    pub candidate_first_name: String,
    pub candidate_last_name: String,
}

/// DTO for submitting a new assessment.
#[derive(Debug)]
pub struct SubmitAssessment {
    pub skill_id: DbId,
    pub video_url: String,
}

/// DTO for the generic assessment update. Which fields a caller may actually
/// touch is decided by `skillreel_core::lifecycle::plan_update`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAssessment {
    pub video_url: Option<String>,
    pub ai_rating: Option<f64>,
    pub ai_feedback: Option<String>,
    pub proctor_rating: Option<f64>,
    pub proctor_comments: Option<String>,
    pub integrity_status: Option<String>,
    pub status: Option<String>,
}

/// DTO for a proctor verification verdict.
#[derive(Debug)]
pub struct VerifyAssessment {
    pub proctor_rating: f64,
    pub proctor_comments: Option<String>,
    pub integrity_status: String,
}
