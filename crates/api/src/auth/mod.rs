//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT access-token issuing and decoding.

pub mod jwt;
pub mod password;
