//! Permission-resolving extractor.
//!
//! [`CurrentUser`] wraps [`AuthUser`] and resolves the caller's granted
//! permissions from the database on every request. Gates check the resolved
//! set, never the role string from the token, so a role whose grants change
//! takes effect on the next request and a user with no grants is denied
//! everything.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use skillreel_core::lifecycle::Actor;
use skillreel_core::permissions::PermissionSet;
use skillreel_core::types::DbId;
use skillreel_db::repositories::PermissionRepo;

use crate::error::AppError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// The authenticated caller with permissions resolved for this request.
///
/// ```ignore
/// async fn list_skills(user: CurrentUser, State(state): State<AppState>) -> AppResult<...> {
///     user.permissions.require(PERM_SKILL_READ)?;
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// The user's internal database id.
    pub user_id: DbId,
    /// The user's role name from the token (informational).
    pub role: String,
    /// Permissions granted through the user's role, resolved this request.
    pub permissions: PermissionSet,
}

impl CurrentUser {
    /// View of this user as a lifecycle actor.
    pub fn actor(&self) -> Actor<'_> {
        Actor::User {
            user_id: self.user_id,
            permissions: &self.permissions,
        }
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        // A resolver failure is a dependency error (500), never a grant.
        // A user with no rows resolves to the empty set and is denied at
        // the first require() check.
        let permissions = PermissionRepo::resolve_for_user(&state.pool, user.user_id).await?;

        Ok(CurrentUser {
            user_id: user.user_id,
            role: user.role,
            permissions,
        })
    }
}
