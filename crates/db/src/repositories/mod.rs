//! Query layer, one repository per table.
//!
//! Repositories are unit structs whose associated async functions take
//! `&PgPool` and return typed rows; no connection state lives here.

pub mod assessment_repo;
pub mod permission_repo;
pub mod role_repo;
pub mod scoring_job_repo;
pub mod skill_repo;
pub mod user_repo;

pub use assessment_repo::AssessmentRepo;
pub use permission_repo::PermissionRepo;
pub use role_repo::RoleRepo;
pub use scoring_job_repo::ScoringJobRepo;
pub use skill_repo::SkillRepo;
pub use user_repo::UserRepo;
