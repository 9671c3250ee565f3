//! Integration tests for the assessment lifecycle at the repository layer.
//!
//! Exercises the optimistic WHERE clauses directly:
//! - Submission creates the row pending and enqueues a scoring job atomically
//! - Each transition applies exactly once; repeats and races lose cleanly
//! - Ownership re-checks on owner-driven operations
//! - List scopes and their ordering

use skillreel_core::lifecycle::{
    STATUS_AI_RATED, STATUS_PENDING_AI_ANALYSIS, STATUS_PROCTOR_REQUESTED, STATUS_PROCTOR_VERIFIED,
};
use skillreel_core::roles::{ROLE_CANDIDATE, ROLE_PROCTOR};
use skillreel_core::types::DbId;
use skillreel_core::verdict::INTEGRITY_CLEAR;
use skillreel_db::models::assessment::{Assessment, SubmitAssessment, VerifyAssessment};
use skillreel_db::models::user::{CreateUser, User};
use skillreel_db::repositories::{
    AssessmentRepo, RoleRepo, ScoringJobRepo, SkillRepo, UserRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_user(pool: &PgPool, email: &str, role_name: &str) -> User {
    let role = RoleRepo::find_by_name(pool, role_name)
        .await
        .unwrap()
        .expect("role should be seeded");
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: "x".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role_id: role.id,
        },
    )
    .await
    .unwrap()
}

async fn first_skill_id(pool: &PgPool) -> DbId {
    SkillRepo::list(pool).await.unwrap()[0].id
}

async fn submit(pool: &PgPool, candidate_id: DbId) -> Assessment {
    let skill_id = first_skill_id(pool).await;
    AssessmentRepo::create(
        pool,
        candidate_id,
        &SubmitAssessment {
            skill_id,
            video_url: "https://cdn.example.com/clip.mp4".to_string(),
        },
        0.0,
    )
    .await
    .unwrap()
}

/// Walk a fresh submission to `proctor_requested`.
async fn submit_requested(pool: &PgPool, candidate_id: DbId) -> Assessment {
    let assessment = submit(pool, candidate_id).await;
    assert!(AssessmentRepo::record_ai_result(pool, assessment.id, 4.2, "solid")
        .await
        .unwrap());
    AssessmentRepo::request_proctor(pool, assessment.id, candidate_id)
        .await
        .unwrap()
        .unwrap()
}

fn verdict() -> VerifyAssessment {
    VerifyAssessment {
        proctor_rating: 4.5,
        proctor_comments: Some("Confirmed live".to_string()),
        integrity_status: INTEGRITY_CLEAR.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Test: submission
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_submission_starts_pending_with_scoring_job(pool: PgPool) {
    let candidate = create_user(&pool, "cand@example.com", ROLE_CANDIDATE).await;
    let assessment = submit(&pool, candidate.id).await;

    assert_eq!(assessment.status, STATUS_PENDING_AI_ANALYSIS);
    assert_eq!(assessment.candidate_id, candidate.id);
    assert!(assessment.ai_rating.is_none());
    assert!(assessment.proctor_id.is_none());

    let job = ScoringJobRepo::find_by_assessment(&pool, assessment.id)
        .await
        .unwrap()
        .expect("submission should enqueue a scoring job");
    assert_eq!(job.attempts, 0);
    assert!(job.completed_at.is_none());
}

// ---------------------------------------------------------------------------
// Test: AI result transition
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_record_ai_result_applies_exactly_once(pool: PgPool) {
    let candidate = create_user(&pool, "cand@example.com", ROLE_CANDIDATE).await;
    let assessment = submit(&pool, candidate.id).await;

    assert!(AssessmentRepo::record_ai_result(&pool, assessment.id, 4.2, "solid")
        .await
        .unwrap());

    let rated = AssessmentRepo::find_by_id(&pool, assessment.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(rated.status, STATUS_AI_RATED);
    assert_eq!(rated.ai_rating, Some(4.2));
    assert_eq!(rated.ai_feedback.as_deref(), Some("solid"));

    // A second apply is a no-op: the WHERE clause no longer matches.
    assert!(!AssessmentRepo::record_ai_result(&pool, assessment.id, 1.0, "other")
        .await
        .unwrap());
    let unchanged = AssessmentRepo::find_by_id(&pool, assessment.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.ai_rating, Some(4.2));
}

// ---------------------------------------------------------------------------
// Test: proctor request transition
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_request_proctor_requires_owner_and_rated_status(pool: PgPool) {
    let owner = create_user(&pool, "owner@example.com", ROLE_CANDIDATE).await;
    let stranger = create_user(&pool, "other@example.com", ROLE_CANDIDATE).await;
    let assessment = submit(&pool, owner.id).await;

    // Still pending: the status check fails.
    assert!(AssessmentRepo::request_proctor(&pool, assessment.id, owner.id)
        .await
        .unwrap()
        .is_none());

    assert!(AssessmentRepo::record_ai_result(&pool, assessment.id, 4.0, "ok")
        .await
        .unwrap());

    // Someone else's id: the ownership check fails.
    assert!(AssessmentRepo::request_proctor(&pool, assessment.id, stranger.id)
        .await
        .unwrap()
        .is_none());

    let requested = AssessmentRepo::request_proctor(&pool, assessment.id, owner.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(requested.status, STATUS_PROCTOR_REQUESTED);
    assert!(requested.proctor_id.is_none());
}

// ---------------------------------------------------------------------------
// Test: verification transition
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_verify_writes_full_verdict(pool: PgPool) {
    let candidate = create_user(&pool, "cand@example.com", ROLE_CANDIDATE).await;
    let proctor = create_user(&pool, "proc@example.com", ROLE_PROCTOR).await;
    let assessment = submit_requested(&pool, candidate.id).await;

    let verified = AssessmentRepo::verify(&pool, assessment.id, proctor.id, &verdict())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(verified.status, STATUS_PROCTOR_VERIFIED);
    assert_eq!(verified.proctor_id, Some(proctor.id));
    assert_eq!(verified.proctor_rating, Some(4.5));
    assert_eq!(verified.proctor_comments.as_deref(), Some("Confirmed live"));
    assert_eq!(verified.integrity_status.as_deref(), Some(INTEGRITY_CLEAR));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_racing_verifications_have_one_winner(pool: PgPool) {
    let candidate = create_user(&pool, "cand@example.com", ROLE_CANDIDATE).await;
    let first = create_user(&pool, "first@example.com", ROLE_PROCTOR).await;
    let second = create_user(&pool, "second@example.com", ROLE_PROCTOR).await;
    let assessment = submit_requested(&pool, candidate.id).await;

    let winner = AssessmentRepo::verify(&pool, assessment.id, first.id, &verdict())
        .await
        .unwrap();
    assert!(winner.is_some());

    let loser = AssessmentRepo::verify(&pool, assessment.id, second.id, &verdict())
        .await
        .unwrap();
    assert!(loser.is_none());

    let stored = AssessmentRepo::find_by_id(&pool, assessment.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.proctor_id, Some(first.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_verify_rejects_wrong_status(pool: PgPool) {
    let candidate = create_user(&pool, "cand@example.com", ROLE_CANDIDATE).await;
    let proctor = create_user(&pool, "proc@example.com", ROLE_PROCTOR).await;
    let assessment = submit(&pool, candidate.id).await;

    // Not yet requested: nothing to verify.
    assert!(AssessmentRepo::verify(&pool, assessment.id, proctor.id, &verdict())
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: owner updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_video_url_rechecks_owner(pool: PgPool) {
    let owner = create_user(&pool, "owner@example.com", ROLE_CANDIDATE).await;
    let stranger = create_user(&pool, "other@example.com", ROLE_CANDIDATE).await;
    let assessment = submit(&pool, owner.id).await;

    assert!(AssessmentRepo::update_video_url(
        &pool,
        assessment.id,
        stranger.id,
        "https://cdn.example.com/hijack.mp4"
    )
    .await
    .unwrap()
    .is_none());

    let updated = AssessmentRepo::update_video_url(
        &pool,
        assessment.id,
        owner.id,
        "https://cdn.example.com/retake.mp4",
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.video_url, "https://cdn.example.com/retake.mp4");
}

// ---------------------------------------------------------------------------
// Test: reads and list scopes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_detail_joins_skill_and_candidate_names(pool: PgPool) {
    let candidate = create_user(&pool, "cand@example.com", ROLE_CANDIDATE).await;
    let assessment = submit(&pool, candidate.id).await;

    let detail = AssessmentRepo::find_detail(&pool, assessment.id)
        .await
        .unwrap()
        .unwrap();
    let skill = SkillRepo::find_by_id(&pool, assessment.skill_id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(detail.skill_name, skill.name);
    assert_eq!(detail.candidate_first_name, "Ada");
    assert_eq!(detail.candidate_last_name, "Lovelace");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_scopes_and_ordering(pool: PgPool) {
    let alice = create_user(&pool, "alice@example.com", ROLE_CANDIDATE).await;
    let bob = create_user(&pool, "bob@example.com", ROLE_CANDIDATE).await;
    let proctor = create_user(&pool, "proc@example.com", ROLE_PROCTOR).await;

    let older = submit(&pool, alice.id).await;
    let newer = submit(&pool, alice.id).await;
    let bobs = submit_requested(&pool, bob.id).await;
    AssessmentRepo::verify(&pool, bobs.id, proctor.id, &verdict())
        .await
        .unwrap()
        .unwrap();

    // Own scope: newest first.
    let own = AssessmentRepo::list_by_candidate(&pool, alice.id).await.unwrap();
    assert_eq!(
        own.iter().map(|a| a.id).collect::<Vec<_>>(),
        vec![newer.id, older.id]
    );

    // Verified scope: only Bob's.
    let verified = AssessmentRepo::list_verified(&pool).await.unwrap();
    assert_eq!(verified.len(), 1);
    assert_eq!(verified[0].id, bobs.id);
    assert_eq!(verified[0].status, STATUS_PROCTOR_VERIFIED);

    // Full scope sees everything.
    assert_eq!(AssessmentRepo::list_all(&pool).await.unwrap().len(), 3);

    // Verified-by scope follows the acting proctor.
    let by_proctor = AssessmentRepo::list_verified_by(&pool, proctor.id).await.unwrap();
    assert_eq!(by_proctor.len(), 1);
    assert!(AssessmentRepo::list_verified_by(&pool, alice.id)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pending_queue_is_oldest_first(pool: PgPool) {
    let alice = create_user(&pool, "alice@example.com", ROLE_CANDIDATE).await;
    let bob = create_user(&pool, "bob@example.com", ROLE_CANDIDATE).await;

    let first = submit_requested(&pool, alice.id).await;
    let second = submit_requested(&pool, bob.id).await;

    let pending = AssessmentRepo::list_pending_requests(&pool).await.unwrap();
    assert_eq!(
        pending.iter().map(|a| a.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );
}
