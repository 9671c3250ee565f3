//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`permissions::CurrentUser`] -- [`auth::AuthUser`] plus the permissions
//!   resolved from the database for this request.

pub mod auth;
pub mod permissions;
