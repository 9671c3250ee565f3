//! S3 client wrapper that issues pre-signed upload URLs.

use std::time::Duration;

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;
use uuid::Uuid;

use crate::config::StorageConfig;
use crate::error::StorageError;

/// Lifetime of a signed upload URL in seconds (ten minutes).
pub const SIGNED_URL_EXPIRY_SECS: u64 = 600;

/// A pre-signed PUT URL paired with the public URL the object will have
/// once the upload completes.
#[derive(Debug, Clone)]
pub struct SignedUpload {
    /// URL the browser PUTs the video bytes to; valid for
    /// [`SIGNED_URL_EXPIRY_SECS`] seconds.
    pub signed_url: String,
    /// Durable URL of the object after upload, stored on the assessment.
    pub public_url: String,
}

/// Handle to the bucket that holds candidate videos.
#[derive(Debug, Clone)]
pub struct StorageClient {
    client: Client,
    bucket: String,
    region: String,
    endpoint: Option<String>,
}

impl StorageClient {
    /// Build a client from configuration.
    ///
    /// Uses the static credentials from the config. Construction and signing
    /// are local computations; no request reaches S3 until a client actually
    /// uploads through a signed URL.
    pub async fn new(config: &StorageConfig) -> Self {
        let credentials = Credentials::from_keys(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None,
        );

        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if let Some(endpoint) = &config.endpoint {
            // MinIO and other S3-compatible stores need path-style addressing.
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
            region: config.region.clone(),
            endpoint: config.endpoint.clone(),
        }
    }

    /// Pre-sign a PUT for one video upload.
    ///
    /// The object key is a fresh UUID prefixed onto the client-supplied file
    /// name, so two candidates uploading `interview.mp4` never collide.
    pub async fn presign_upload(
        &self,
        file_name: &str,
        content_type: &str,
    ) -> Result<SignedUpload, StorageError> {
        let key = format!("{}-{}", Uuid::new_v4(), file_name);

        let presign_config = PresigningConfig::builder()
            .expires_in(Duration::from_secs(SIGNED_URL_EXPIRY_SECS))
            .build()
            .map_err(|e| StorageError::Presign(e.to_string()))?;

        let presigned = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(content_type)
            .presigned(presign_config)
            .await
            .map_err(|e| StorageError::Presign(e.to_string()))?;

        let public_url = match &self.endpoint {
            Some(endpoint) => {
                format!("{}/{}/{}", endpoint.trim_end_matches('/'), self.bucket, key)
            }
            None => format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.bucket, self.region, key
            ),
        };

        Ok(SignedUpload {
            signed_url: presigned.uri().to_string(),
            public_url,
        })
    }
}
