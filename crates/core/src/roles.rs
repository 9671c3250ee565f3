//! Well-known role name constants.
//!
//! These must match the seed data in `20260301000001_create_roles_table.sql`.
//! Role names identify accounts for display and registration defaults only;
//! authorization gates consult resolved permissions, never these strings.

pub const ROLE_CANDIDATE: &str = "candidate";
pub const ROLE_PROCTOR: &str = "proctor";
pub const ROLE_RECRUITER: &str = "recruiter";
pub const ROLE_ADMIN: &str = "admin";
