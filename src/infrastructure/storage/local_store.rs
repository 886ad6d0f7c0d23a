use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{FeedbackStore, FeedbackStoreError};
use crate::domain::StoragePath;

/// Feedback audio on the local filesystem, rooted at `base_path`.
pub struct LocalFeedbackStore {
    inner: Arc<LocalFileSystem>,
    base_path: PathBuf,
}

impl LocalFeedbackStore {
    pub fn new(base_path: PathBuf) -> Result<Self, FeedbackStoreError> {
        std::fs::create_dir_all(&base_path).map_err(FeedbackStoreError::Io)?;
        let base_path = base_path.canonicalize().map_err(FeedbackStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(&base_path)
            .map_err(|e| FeedbackStoreError::UploadFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
            base_path,
        })
    }

    /// Absolute filesystem location of a stored object.
    pub fn local_path(&self, path: &StoragePath) -> PathBuf {
        self.base_path.join(path.as_str())
    }
}

#[async_trait::async_trait]
impl FeedbackStore for LocalFeedbackStore {
    async fn store(&self, path: &StoragePath, data: Bytes) -> Result<u64, FeedbackStoreError> {
        let store_path = StorePath::from(path.as_str());
        let size = data.len() as u64;

        self.inner
            .put(&store_path, PutPayload::from(data))
            .await
            .map_err(|e| FeedbackStoreError::UploadFailed(e.to_string()))?;

        Ok(size)
    }

    async fn fetch(&self, path: &StoragePath) -> Result<Bytes, FeedbackStoreError> {
        let store_path = StorePath::from(path.as_str());
        let result = self.inner.get(&store_path).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => FeedbackStoreError::NotFound(path.to_string()),
            other => FeedbackStoreError::DownloadFailed(other.to_string()),
        })?;

        result
            .bytes()
            .await
            .map_err(|e| FeedbackStoreError::DownloadFailed(e.to_string()))
    }
}
