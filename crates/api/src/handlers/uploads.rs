//! Handlers for the `/uploads` resource (pre-signed video uploads).

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use skillreel_core::permissions::PERM_UPLOAD_SIGN;

use crate::error::{AppError, AppResult};
use crate::middleware::permissions::CurrentUser;
use crate::state::AppState;

/// Request body for `POST /uploads/sign`.
#[derive(Debug, Deserialize)]
pub struct SignUploadRequest {
    pub file_name: Option<String>,
    pub file_type: Option<String>,
}

/// A pre-signed upload grant.
#[derive(Debug, Serialize)]
pub struct SignUploadResponse {
    /// PUT the video bytes here before the URL expires.
    pub signed_url: String,
    /// Durable address to submit as the assessment's `video_url`.
    pub public_url: String,
}

/// POST /api/v1/uploads/sign
///
/// Issue a short-lived pre-signed PUT URL for a video upload. The video
/// itself never passes through this service.
pub async fn sign_upload(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(input): Json<SignUploadRequest>,
) -> AppResult<Json<SignUploadResponse>> {
    user.permissions.require(PERM_UPLOAD_SIGN)?;

    let (Some(file_name), Some(file_type)) = (input.file_name, input.file_type) else {
        return Err(AppError::BadRequest(
            "file_name and file_type are required.".into(),
        ));
    };

    let upload = state.storage.presign_upload(&file_name, &file_type).await?;

    tracing::info!(user_id = user.user_id, file_name, "Signed upload URL issued");

    Ok(Json(SignUploadResponse {
        signed_url: upload.signed_url,
        public_url: upload.public_url,
    }))
}
