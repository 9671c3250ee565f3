//! Liveness endpoint, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthBody {
    /// `"ok"` while the database answers, `"degraded"` otherwise.
    status: &'static str,
    version: &'static str,
    db_healthy: bool,
}

/// GET /health
///
/// Always 200; database reachability is reported in the body, not the
/// status code.
async fn health(State(state): State<AppState>) -> Json<HealthBody> {
    let db_healthy = skillreel_db::health_check(&state.pool).await;

    Json(HealthBody {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
