//! Repository for the `assessments` table.
//!
//! Every status-changing statement re-checks the expected prior status in
//! its WHERE clause, so concurrent transitions resolve to exactly one
//! winner; losers see zero rows and surface a conflict upstream. No status
//! literal appears inline -- all of them come from
//! `skillreel_core::lifecycle`.

use skillreel_core::lifecycle::{
    STATUS_AI_RATED, STATUS_PENDING_AI_ANALYSIS, STATUS_PROCTOR_REQUESTED, STATUS_PROCTOR_VERIFIED,
};
use skillreel_core::types::DbId;
use sqlx::PgPool;

use crate::models::assessment::{
    Assessment, AssessmentDetail, SubmitAssessment, VerifyAssessment,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, candidate_id, skill_id, video_url, status, \
                       ai_rating, ai_feedback, proctor_id, proctor_rating, \
                       proctor_comments, integrity_status, created_at, updated_at";

/// Column list for queries joining skill and candidate names.
const DETAIL_COLUMNS: &str = "a.id, a.candidate_id, a.skill_id, a.video_url, a.status, \
                              a.ai_rating, a.ai_feedback, a.proctor_id, a.proctor_rating, \
                              a.proctor_comments, a.integrity_status, a.created_at, a.updated_at, \
                              s.name AS skill_name, \
                              u.first_name AS candidate_first_name, \
                              u.last_name AS candidate_last_name";

/// Shared FROM/JOIN clause for detail queries.
const DETAIL_FROM: &str = "FROM assessments a \
                           JOIN skills s ON s.id = a.skill_id \
                           JOIN users u ON u.id = a.candidate_id";

/// Provides lifecycle and read operations for assessments.
pub struct AssessmentRepo;

impl AssessmentRepo {
    /// Insert a new assessment in the initial status and enqueue its scoring
    /// job in the same transaction.
    ///
    /// `scoring_delay_secs` is how far in the future the job becomes due.
    pub async fn create(
        pool: &PgPool,
        candidate_id: DbId,
        input: &SubmitAssessment,
        scoring_delay_secs: f64,
    ) -> Result<Assessment, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO assessments (candidate_id, skill_id, video_url, status)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let assessment = sqlx::query_as::<_, Assessment>(&query)
            .bind(candidate_id)
            .bind(input.skill_id)
            .bind(&input.video_url)
            .bind(STATUS_PENDING_AI_ANALYSIS)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO scoring_jobs (assessment_id, run_after)
             VALUES ($1, NOW() + make_interval(secs => $2))",
        )
        .bind(assessment.id)
        .bind(scoring_delay_secs)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(assessment)
    }

    /// Find an assessment by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Assessment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assessments WHERE id = $1");
        sqlx::query_as::<_, Assessment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an assessment with skill and candidate names joined.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AssessmentDetail>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} {DETAIL_FROM} WHERE a.id = $1");
        sqlx::query_as::<_, AssessmentDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every assessment, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<AssessmentDetail>, sqlx::Error> {
        let query =
            format!("SELECT {DETAIL_COLUMNS} {DETAIL_FROM} ORDER BY a.created_at DESC");
        sqlx::query_as::<_, AssessmentDetail>(&query)
            .fetch_all(pool)
            .await
    }

    /// List proctor-verified assessments from any candidate, newest first.
    pub async fn list_verified(pool: &PgPool) -> Result<Vec<AssessmentDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} {DETAIL_FROM}
             WHERE a.status = $1
             ORDER BY a.created_at DESC"
        );
        sqlx::query_as::<_, AssessmentDetail>(&query)
            .bind(STATUS_PROCTOR_VERIFIED)
            .fetch_all(pool)
            .await
    }

    /// List one candidate's assessments, newest first.
    pub async fn list_by_candidate(
        pool: &PgPool,
        candidate_id: DbId,
    ) -> Result<Vec<AssessmentDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} {DETAIL_FROM}
             WHERE a.candidate_id = $1
             ORDER BY a.created_at DESC"
        );
        sqlx::query_as::<_, AssessmentDetail>(&query)
            .bind(candidate_id)
            .fetch_all(pool)
            .await
    }

    /// List assessments awaiting proctor review, oldest request first.
    pub async fn list_pending_requests(
        pool: &PgPool,
    ) -> Result<Vec<AssessmentDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} {DETAIL_FROM}
             WHERE a.status = $1
             ORDER BY a.created_at ASC"
        );
        sqlx::query_as::<_, AssessmentDetail>(&query)
            .bind(STATUS_PROCTOR_REQUESTED)
            .fetch_all(pool)
            .await
    }

    /// List assessments verified by the given proctor, most recently
    /// verified first.
    pub async fn list_verified_by(
        pool: &PgPool,
        proctor_id: DbId,
    ) -> Result<Vec<AssessmentDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} {DETAIL_FROM}
             WHERE a.proctor_id = $1 AND a.status = $2
             ORDER BY a.updated_at DESC"
        );
        sqlx::query_as::<_, AssessmentDetail>(&query)
            .bind(proctor_id)
            .bind(STATUS_PROCTOR_VERIFIED)
            .fetch_all(pool)
            .await
    }

    /// Replace the owner-editable video URL.
    ///
    /// The WHERE clause re-checks ownership; returns `None` when the row is
    /// missing or owned by someone else.
    pub async fn update_video_url(
        pool: &PgPool,
        id: DbId,
        candidate_id: DbId,
        video_url: &str,
    ) -> Result<Option<Assessment>, sqlx::Error> {
        let query = format!(
            "UPDATE assessments
             SET video_url = $3, updated_at = NOW()
             WHERE id = $1 AND candidate_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assessment>(&query)
            .bind(id)
            .bind(candidate_id)
            .bind(video_url)
            .fetch_optional(pool)
            .await
    }

    /// Apply the `pending_AI_analysis -> AI_rated` transition, writing the
    /// rating and feedback together.
    ///
    /// Returns `false` when the assessment is missing or already advanced,
    /// which makes repeated scoring attempts harmless.
    pub async fn record_ai_result(
        pool: &PgPool,
        id: DbId,
        rating: f64,
        feedback: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE assessments
             SET ai_rating = $2, ai_feedback = $3, status = $4, updated_at = NOW()
             WHERE id = $1 AND status = $5",
        )
        .bind(id)
        .bind(rating)
        .bind(feedback)
        .bind(STATUS_AI_RATED)
        .bind(STATUS_PENDING_AI_ANALYSIS)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply the `AI_rated -> proctor_requested` transition for the owner.
    ///
    /// Ownership and prior status are both re-checked; returns `None` when
    /// either does not hold.
    pub async fn request_proctor(
        pool: &PgPool,
        id: DbId,
        candidate_id: DbId,
    ) -> Result<Option<Assessment>, sqlx::Error> {
        let query = format!(
            "UPDATE assessments
             SET status = $3, updated_at = NOW()
             WHERE id = $1 AND candidate_id = $2 AND status = $4
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assessment>(&query)
            .bind(id)
            .bind(candidate_id)
            .bind(STATUS_PROCTOR_REQUESTED)
            .bind(STATUS_AI_RATED)
            .fetch_optional(pool)
            .await
    }

    /// Apply the `proctor_requested -> proctor_verified` transition, writing
    /// the full verdict atomically.
    ///
    /// Of two racing verifications exactly one matches the WHERE clause; the
    /// loser gets `None` and surfaces a conflict.
    pub async fn verify(
        pool: &PgPool,
        id: DbId,
        proctor_id: DbId,
        verdict: &VerifyAssessment,
    ) -> Result<Option<Assessment>, sqlx::Error> {
        let query = format!(
            "UPDATE assessments
             SET status = $3, proctor_id = $2, proctor_rating = $4,
                 proctor_comments = $5, integrity_status = $6, updated_at = NOW()
             WHERE id = $1 AND status = $7
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assessment>(&query)
            .bind(id)
            .bind(proctor_id)
            .bind(STATUS_PROCTOR_VERIFIED)
            .bind(verdict.proctor_rating)
            .bind(&verdict.proctor_comments)
            .bind(&verdict.integrity_status)
            .bind(STATUS_PROCTOR_REQUESTED)
            .fetch_optional(pool)
            .await
    }
}
