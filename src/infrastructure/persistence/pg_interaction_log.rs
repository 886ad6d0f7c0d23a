use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use crate::application::ports::{InteractionLog, InteractionLogError};
use crate::domain::InteractionRecord;

const UNIQUE_VIOLATION: &str = "23505";

pub struct PgInteractionLog {
    pool: PgPool,
}

impl PgInteractionLog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InteractionLog for PgInteractionLog {
    #[instrument(skip(self, record), fields(interaction_id = %record.id))]
    async fn append(&self, record: &InteractionRecord) -> Result<(), InteractionLogError> {
        sqlx::query(
            r#"
            INSERT INTO interactions (id, user_id, scenario, transcript, analysis, session_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(&record.user_id)
        .bind(record.scenario.label())
        .bind(&record.transcript)
        .bind(&record.analysis)
        .bind(record.session_date)
        .execute(&self.pool)
        .await
        .map_err(|e| match e.as_database_error().and_then(|d| d.code()) {
            Some(code) if code == UNIQUE_VIOLATION => {
                InteractionLogError::AlreadyExists(record.id.to_string())
            }
            _ => InteractionLogError::WriteFailed(e.to_string()),
        })?;

        Ok(())
    }
}
