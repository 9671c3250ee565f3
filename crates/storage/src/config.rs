//! Environment-driven configuration for the S3 storage client.

/// Fallback bucket used when `S3_BUCKET` is unset (local development).
const DEFAULT_BUCKET: &str = "skillreel-videos-dev";
/// Fallback region used when `AWS_REGION` is unset.
const DEFAULT_REGION: &str = "us-east-1";

/// Connection settings for the bucket that holds candidate videos.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Bucket that receives uploaded videos.
    pub bucket: String,
    /// AWS region the bucket lives in.
    pub region: String,
    /// Optional custom endpoint (MinIO or another S3-compatible store).
    /// When set, requests use path-style addressing.
    pub endpoint: Option<String>,
    /// Static access key id used to sign upload URLs.
    pub access_key_id: String,
    /// Static secret access key used to sign upload URLs.
    pub secret_access_key: String,
}

impl StorageConfig {
    /// Load storage configuration from environment variables.
    ///
    /// | Env Var                 | Required | Default                 |
    /// |-------------------------|----------|-------------------------|
    /// | `S3_BUCKET`             | no       | `skillreel-videos-dev`  |
    /// | `AWS_REGION`            | no       | `us-east-1`             |
    /// | `S3_ENDPOINT`           | no       | --                      |
    /// | `AWS_ACCESS_KEY_ID`     | no       | `dev-access-key`        |
    /// | `AWS_SECRET_ACCESS_KEY` | no       | `dev-secret-key`        |
    ///
    /// The credential defaults exist so local development works without an
    /// AWS account; presigning is a local computation and never calls S3.
    /// Production deployments must set real values.
    pub fn from_env() -> Self {
        let bucket = std::env::var("S3_BUCKET").unwrap_or_else(|_| DEFAULT_BUCKET.to_string());
        let region = std::env::var("AWS_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());
        let endpoint = std::env::var("S3_ENDPOINT").ok().filter(|e| !e.is_empty());

        let access_key_id =
            std::env::var("AWS_ACCESS_KEY_ID").unwrap_or_else(|_| "dev-access-key".to_string());
        let secret_access_key = std::env::var("AWS_SECRET_ACCESS_KEY")
            .unwrap_or_else(|_| "dev-secret-key".to_string());

        Self {
            bucket,
            region,
            endpoint,
            access_key_id,
            secret_access_key,
        }
    }
}
