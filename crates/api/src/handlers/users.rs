//! Handlers for the `/users` resource (own-profile operations).

use axum::extract::State;
use axum::Json;
use skillreel_core::account::{normalize_email, validate_email};
use skillreel_core::error::CoreError;
use skillreel_core::permissions::{PERM_USER_READ_OWN, PERM_USER_UPDATE_OWN};
use skillreel_db::models::user::{UpdateProfile, UserProfile};
use skillreel_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::permissions::CurrentUser;
use crate::state::AppState;

/// GET /api/v1/users/profile
///
/// The calling user's own profile with the role name resolved.
pub async fn get_profile(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<UserProfile>> {
    user.permissions.require(PERM_USER_READ_OWN)?;

    let profile = UserRepo::profile(&state.pool, user.user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        })?;

    Ok(Json(profile))
}

/// PUT /api/v1/users/profile
///
/// Update the calling user's email or name. Omitted fields are left
/// untouched; a changed email must still be unique.
pub async fn update_profile(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<UserProfile>> {
    user.permissions.require(PERM_USER_UPDATE_OWN)?;

    if input.email.is_none() && input.first_name.is_none() && input.last_name.is_none() {
        return Err(AppError::Core(CoreError::Validation(
            "No updatable fields provided".into(),
        )));
    }

    let email = match input.email {
        Some(raw) => {
            let email = normalize_email(&raw);
            validate_email(&email).map_err(CoreError::Validation)?;

            // Friendly pre-check; uq_users_email is the backstop.
            if let Some(existing) = UserRepo::find_by_email(&state.pool, &email).await? {
                if existing.id != user.user_id {
                    return Err(AppError::Core(CoreError::Conflict(
                        "User with this email already exists.".into(),
                    )));
                }
            }
            Some(email)
        }
        None => None,
    };

    let update = UpdateProfile {
        email,
        first_name: input.first_name,
        last_name: input.last_name,
    };

    UserRepo::update_profile(&state.pool, user.user_id, &update)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        })?;

    let profile = UserRepo::profile(&state.pool, user.user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        })?;

    tracing::info!(user_id = user.user_id, "Profile updated");

    Ok(Json(profile))
}
