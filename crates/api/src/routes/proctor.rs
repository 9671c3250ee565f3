//! Route definitions for the `/proctor` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::proctor;
use crate::state::AppState;

/// Routes mounted at `/proctor`.
///
/// ```text
/// GET    /requests/pending   -> pending_requests
/// GET    /verifications      -> my_verifications
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/requests/pending", get(proctor::pending_requests))
        .route("/verifications", get(proctor::my_verifications))
}
