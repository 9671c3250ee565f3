use crate::types::DbId;

/// Domain-level error taxonomy shared by every crate in the workspace.
///
/// Each variant maps onto exactly one HTTP status at the API boundary, so
/// lower layers signal intent by choosing the variant rather than by
/// formatting messages.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
