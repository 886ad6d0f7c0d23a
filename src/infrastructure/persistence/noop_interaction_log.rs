use crate::application::ports::{InteractionLog, InteractionLogError};
use crate::domain::InteractionRecord;

/// Discards records. Selected with `interaction_log.provider = "none"` and in
/// scaffold mode.
pub struct NoopInteractionLog;

#[async_trait::async_trait]
impl InteractionLog for NoopInteractionLog {
    async fn append(&self, record: &InteractionRecord) -> Result<(), InteractionLogError> {
        tracing::debug!(interaction_id = %record.id, "Interaction logging disabled, record discarded");
        Ok(())
    }
}
