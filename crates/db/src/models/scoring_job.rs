//! Scoring job queue entity model.

use serde::Serialize;
use skillreel_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `scoring_jobs` queue table.
///
/// `run_after` is both the initial delay and the visibility timeout: a claim
/// moves it into the future, so an engine that dies mid-job simply lets the
/// claim lapse back into view.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ScoringJob {
    pub id: DbId,
    pub assessment_id: DbId,
    pub run_after: Timestamp,
    pub attempts: i32,
    pub completed_at: Option<Timestamp>,
    pub last_error: Option<String>,
    pub created_at: Timestamp,
}
