pub mod assessments;
pub mod auth;
pub mod health;
pub mod proctor;
pub mod skills;
pub mod uploads;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
///
/// /skills                              list skills
///
/// /uploads/sign                        pre-signed video upload URL (POST)
///
/// /assessments                         list, submit (GET, POST)
/// /assessments/{id}                    get, update (GET, PUT)
/// /assessments/{id}/request-proctor    request human review (POST)
/// /assessments/{id}/proctor-verify     record proctor verdict (POST)
///
/// /proctor/requests/pending            review queue, oldest first (GET)
/// /proctor/verifications               caller's verified assessments (GET)
///
/// /users/profile                       own profile (GET, PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login).
        .nest("/auth", auth::router())
        // Skill catalog.
        .nest("/skills", skills::router())
        // Pre-signed video uploads.
        .nest("/uploads", uploads::router())
        // Assessment lifecycle (submit, read, update, transitions).
        .nest("/assessments", assessments::router())
        // Proctor review queues.
        .nest("/proctor", proctor::router())
        // Own-profile management.
        .nest("/users", users::router())
}
