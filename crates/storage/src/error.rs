use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("S3 presign error: {0}")]
    Presign(String),
}
