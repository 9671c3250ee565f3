//! skillreel-storage
//!
//! Pre-signed S3 upload URLs for candidate videos. Thin wrapper around the
//! AWS S3 SDK; the API layer never talks to S3 directly.

pub mod client;
pub mod config;
pub mod error;

pub use client::{SignedUpload, StorageClient, SIGNED_URL_EXPIRY_SECS};
pub use config::StorageConfig;
pub use error::StorageError;
