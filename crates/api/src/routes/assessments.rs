//! Route definitions for the `/assessments` resource.
//!
//! All endpoints require authentication.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::assessments;
use crate::state::AppState;

/// Routes mounted at `/assessments`.
///
/// ```text
/// GET    /                       -> list_assessments
/// POST   /                       -> submit_assessment
/// GET    /{id}                   -> get_assessment
/// PUT    /{id}                   -> update_assessment
/// POST   /{id}/request-proctor   -> request_proctor
/// POST   /{id}/proctor-verify    -> verify_assessment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(assessments::list_assessments).post(assessments::submit_assessment),
        )
        .route(
            "/{id}",
            get(assessments::get_assessment).put(assessments::update_assessment),
        )
        .route("/{id}/request-proctor", post(assessments::request_proctor))
        .route("/{id}/proctor-verify", post(assessments::verify_assessment))
}
