use std::io;

use bytes::Bytes;

use crate::domain::StoragePath;

#[async_trait::async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Writes the whole payload and returns the number of bytes stored.
    async fn store(&self, path: &StoragePath, data: Bytes) -> Result<u64, FeedbackStoreError>;

    async fn fetch(&self, path: &StoragePath) -> Result<Bytes, FeedbackStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FeedbackStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
