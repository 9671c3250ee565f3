//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate policy decisions to `skillreel_core`, persistence to
//! the repositories in `skillreel_db`, and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod assessments;
pub mod auth;
pub mod proctor;
pub mod skills;
pub mod uploads;
pub mod users;
