//! Domain logic for the SkillReel assessment platform.
//!
//! This crate is deliberately free of I/O: the lifecycle rules, permission
//! checks, and scoring simulation defined here are exercised by the `db` and
//! `api` crates but never touch a socket or a connection pool themselves.

pub mod account;
pub mod error;
pub mod lifecycle;
pub mod permissions;
pub mod roles;
pub mod scoring;
pub mod types;
pub mod verdict;

pub use error::CoreError;
pub use types::{DbId, Timestamp};
