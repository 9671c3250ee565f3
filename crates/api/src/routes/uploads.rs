//! Route definitions for the `/uploads` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Routes mounted at `/uploads`.
///
/// ```text
/// POST   /sign   -> sign_upload
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/sign", post(uploads::sign_upload))
}
