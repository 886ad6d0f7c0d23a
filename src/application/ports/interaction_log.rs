use async_trait::async_trait;

use crate::domain::InteractionRecord;

/// Append-only sink for interaction records. Nothing is ever read back.
#[async_trait]
pub trait InteractionLog: Send + Sync {
    async fn append(&self, record: &InteractionRecord) -> Result<(), InteractionLogError>;
}

#[derive(Debug, thiserror::Error)]
pub enum InteractionLogError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("record already exists: {0}")]
    AlreadyExists(String),
}
