use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use skillreel_core::error::CoreError;
use skillreel_storage::StorageError;

/// Error type returned by every HTTP handler.
///
/// Domain errors arrive as [`CoreError`]; the remaining variants cover
/// concerns that only exist at the HTTP layer. `IntoResponse` renders all
/// of them as `{ "error": <message>, "code": <CODE> }` JSON.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `skillreel_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A not-found outcome keyed by something other than a numeric id
    /// (e.g. an email lookup at login).
    #[error("Not found: {0}")]
    NotFound(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::InternalError(format!("Storage error: {err}"))
    }
}

/// Status, code, and client-visible message for one error.
type ErrorParts = (StatusCode, &'static str, String);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.to_parts();
        let body = json!({
            "error": message,
            "code": code,
        });
        (status, axum::Json(body)).into_response()
    }
}

impl AppError {
    fn to_parts(&self) -> ErrorParts {
        match self {
            AppError::Core(core) => core_parts(core),
            AppError::Database(err) => database_parts(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::InternalError(msg) => sanitized_internal(msg),
        }
    }
}

fn core_parts(core: &CoreError) -> ErrorParts {
    match core {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
        CoreError::Internal(msg) => sanitized_internal(msg),
    }
}

/// Map a sqlx error to response parts.
///
/// `RowNotFound` is a 404. A Postgres unique violation (23505) on one of
/// our `uq_`-prefixed constraints is a 409 naming the constraint. Anything
/// else is logged and sanitized to a 500.
fn database_parts(err: &sqlx::Error) -> ErrorParts {
    if matches!(err, sqlx::Error::RowNotFound) {
        return (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        );
    }
    if let Some(constraint) = unique_violation(err) {
        return (
            StatusCode::CONFLICT,
            "CONFLICT",
            format!("Duplicate value violates unique constraint: {constraint}"),
        );
    }
    sanitized_internal(err)
}

/// The violated constraint name, when `err` is a Postgres 23505 on a
/// `uq_`-prefixed constraint.
fn unique_violation(err: &sqlx::Error) -> Option<&str> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };
    if db_err.code().as_deref() != Some("23505") {
        return None;
    }
    db_err.constraint().filter(|c| c.starts_with("uq_"))
}

/// Log the real error server-side and hand the client a generic 500.
fn sanitized_internal(err: &dyn std::fmt::Display) -> ErrorParts {
    tracing::error!(error = %err, "Internal error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
