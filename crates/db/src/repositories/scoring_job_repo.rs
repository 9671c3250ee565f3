//! Repository for the `scoring_jobs` queue table.
//!
//! Jobs are enqueued by `AssessmentRepo::create` in the same transaction as
//! the assessment row. This repository owns claiming and settlement.

use skillreel_core::types::DbId;
use sqlx::PgPool;

use crate::models::scoring_job::ScoringJob;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, assessment_id, run_after, attempts, completed_at, last_error, created_at";

/// Provides queue operations for scoring jobs.
pub struct ScoringJobRepo;

impl ScoringJobRepo {
    /// Atomically claim the next due job.
    ///
    /// Uses `SELECT FOR UPDATE SKIP LOCKED` so concurrent engines never
    /// double-claim. The claim itself pushes `run_after` forward by
    /// `visibility_timeout_secs` and increments `attempts`; if the claimer
    /// dies, the job reappears once the timeout lapses.
    pub async fn claim_next(
        pool: &PgPool,
        visibility_timeout_secs: f64,
    ) -> Result<Option<ScoringJob>, sqlx::Error> {
        let query = format!(
            "UPDATE scoring_jobs
             SET attempts = attempts + 1,
                 run_after = NOW() + make_interval(secs => $1)
             WHERE id = (
                 SELECT id FROM scoring_jobs
                 WHERE completed_at IS NULL AND run_after <= NOW()
                 ORDER BY run_after ASC
                 LIMIT 1
                 FOR UPDATE SKIP LOCKED
             )
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ScoringJob>(&query)
            .bind(visibility_timeout_secs)
            .fetch_optional(pool)
            .await
    }

    /// Mark a job as successfully completed.
    pub async fn complete(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE scoring_jobs SET completed_at = NOW(), last_error = NULL WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Record a failed attempt and reschedule the job `backoff_secs` out.
    pub async fn record_failure(
        pool: &PgPool,
        id: DbId,
        error: &str,
        backoff_secs: f64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE scoring_jobs
             SET last_error = $2, run_after = NOW() + make_interval(secs => $3)
             WHERE id = $1",
        )
        .bind(id)
        .bind(error)
        .bind(backoff_secs)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Retire a job that has exhausted its attempts.
    ///
    /// Sets `completed_at` so the job leaves the queue, keeping `last_error`
    /// as the record of why it never succeeded.
    pub async fn abandon(pool: &PgPool, id: DbId, error: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE scoring_jobs SET completed_at = NOW(), last_error = $2 WHERE id = $1",
        )
        .bind(id)
        .bind(error)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Find the job for an assessment, if one was ever enqueued.
    pub async fn find_by_assessment(
        pool: &PgPool,
        assessment_id: DbId,
    ) -> Result<Option<ScoringJob>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scoring_jobs WHERE assessment_id = $1");
        sqlx::query_as::<_, ScoringJob>(&query)
            .bind(assessment_id)
            .fetch_optional(pool)
            .await
    }
}
