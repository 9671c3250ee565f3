//! Background scoring engine.
//!
//! Polls the `scoring_jobs` queue for due jobs and applies the
//! `pending_AI_analysis -> AI_rated` transition.  Uses `FOR UPDATE SKIP
//! LOCKED` via [`ScoringJobRepo::claim_next`], so multiple engine instances
//! never double-claim. Delivery is at-least-once; the apply is idempotent
//! because [`AssessmentRepo::record_ai_result`] re-checks the prior status.

use std::time::Duration;

use skillreel_core::scoring;
use skillreel_db::models::scoring_job::ScoringJob;
use skillreel_db::repositories::{AssessmentRepo, ScoringJobRepo};
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

use crate::config::ScoringConfig;

/// Background scoring engine.
///
/// A single long-lived Tokio task that turns submitted assessments into
/// AI-rated ones. Failures are logged and retried with linear backoff;
/// they never surface to a candidate.
pub struct ScoringEngine {
    pool: PgPool,
    config: ScoringConfig,
}

impl ScoringEngine {
    /// Create a new engine.
    pub fn new(pool: PgPool, config: ScoringConfig) -> Self {
        Self { pool, config }
    }

    /// Run the engine loop until the cancellation token is triggered.
    pub async fn run(&self, cancel: CancellationToken) {
        let mut ticker = tokio::time::interval(Duration::from_secs(self.config.poll_interval_secs));
        tracing::info!(
            poll_interval_secs = self.config.poll_interval_secs,
            delay_secs = self.config.delay_secs,
            "Scoring engine started",
        );

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Scoring engine shutting down");
                    break;
                }
                _ = ticker.tick() => {
                    if let Err(e) = self.run_due_jobs().await {
                        tracing::error!(error = %e, "Scoring cycle failed");
                    }
                }
            }
        }
    }

    /// One engine cycle: claim and process every currently due job.
    ///
    /// Returns the number of jobs processed. Per-job failures are settled
    /// against the queue (retry or retire) and do not abort the cycle.
    pub async fn run_due_jobs(&self) -> Result<u32, sqlx::Error> {
        let mut processed = 0;

        while let Some(job) =
            ScoringJobRepo::claim_next(&self.pool, self.config.visibility_timeout_secs).await?
        {
            match self.process(&job).await {
                Ok(()) => processed += 1,
                Err(e) => {
                    tracing::error!(
                        job_id = job.id,
                        assessment_id = job.assessment_id,
                        attempts = job.attempts,
                        error = %e,
                        "Scoring job failed",
                    );
                    self.settle_failure(&job, &e.to_string()).await?;
                }
            }
        }

        Ok(processed)
    }

    /// Score one claimed job and mark it completed.
    async fn process(&self, job: &ScoringJob) -> Result<(), sqlx::Error> {
        let Some(assessment) = AssessmentRepo::find_by_id(&self.pool, job.assessment_id).await?
        else {
            // The assessment is gone; retire the job rather than retrying
            // it forever.
            tracing::warn!(
                job_id = job.id,
                assessment_id = job.assessment_id,
                "Scoring job refers to a missing assessment",
            );
            ScoringJobRepo::abandon(&self.pool, job.id, "Assessment no longer exists").await?;
            return Ok(());
        };

        let result = scoring::simulate();
        let applied =
            AssessmentRepo::record_ai_result(&self.pool, assessment.id, result.rating, &result.feedback)
                .await?;

        if applied {
            tracing::info!(
                assessment_id = assessment.id,
                rating = result.rating,
                "AI analysis recorded",
            );
        } else {
            // Already advanced past pending; a redelivered job is a no-op.
            tracing::debug!(
                assessment_id = assessment.id,
                status = %assessment.status,
                "Assessment already scored, skipping",
            );
        }

        ScoringJobRepo::complete(&self.pool, job.id).await
    }

    /// Reschedule a failed job with linear backoff, or retire it once its
    /// attempts are exhausted.
    async fn settle_failure(&self, job: &ScoringJob, error: &str) -> Result<(), sqlx::Error> {
        // `attempts` already counts the claim that just failed.
        if job.attempts >= self.config.max_attempts {
            tracing::warn!(
                job_id = job.id,
                assessment_id = job.assessment_id,
                attempts = job.attempts,
                "Scoring job exhausted its attempts, retiring",
            );
            ScoringJobRepo::abandon(&self.pool, job.id, error).await
        } else {
            let backoff_secs = self.config.retry_backoff_secs * job.attempts as f64;
            ScoringJobRepo::record_failure(&self.pool, job.id, error, backoff_secs).await
        }
    }
}
