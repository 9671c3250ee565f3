//! Row structs and request/response shapes, one submodule per table.
//!
//! A submodule usually holds a `FromRow` struct mirroring the row,
//! `Deserialize` payloads for the writes the API accepts, and a
//! `Serialize` view where the raw row is not fit to return (password
//! hash stripped, foreign keys resolved to names).

pub mod assessment;
pub mod role;
pub mod scoring_job;
pub mod skill;
pub mod user;
