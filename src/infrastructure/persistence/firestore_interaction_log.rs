use async_trait::async_trait;
use serde_json::{Value, json};

use crate::application::ports::{InteractionLog, InteractionLogError};
use crate::domain::InteractionRecord;
use crate::infrastructure::google::{GoogleAuth, error_body};

pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com";

/// Appends records to a Firestore collection through `documents:commit` so the
/// `timestamp` field can be set from the server clock.
pub struct FirestoreInteractionLog {
    client: reqwest::Client,
    endpoint: String,
    documents_root: String,
    collection: String,
    auth: GoogleAuth,
}

impl FirestoreInteractionLog {
    pub fn new(
        client: reqwest::Client,
        base_url: Option<String>,
        auth: GoogleAuth,
        project_id: &str,
        database_id: &str,
        collection: String,
    ) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_FIRESTORE_BASE_URL.to_string());
        let documents_root = format!(
            "projects/{}/databases/{}/documents",
            project_id, database_id
        );
        Self {
            client,
            endpoint: format!(
                "{}/v1/{}:commit",
                base_url.trim_end_matches('/'),
                documents_root
            ),
            documents_root,
            collection,
            auth,
        }
    }

    fn commit_body(&self, record: &InteractionRecord) -> Value {
        let name = format!(
            "{}/{}/{}",
            self.documents_root,
            self.collection,
            record.id.as_uuid()
        );

        json!({
            "writes": [{
                "update": {
                    "name": name,
                    "fields": {
                        "user_id": { "stringValue": record.user_id },
                        "scenario": { "stringValue": record.scenario.label() },
                        "transcript": { "stringValue": record.transcript },
                        "analysis": { "stringValue": record.analysis },
                        "session_date": { "stringValue": record.session_date_string() },
                    }
                },
                "currentDocument": { "exists": false },
                "updateTransforms": [{
                    "fieldPath": "timestamp",
                    "setToServerValue": "REQUEST_TIME"
                }]
            }]
        })
    }
}

#[async_trait]
impl InteractionLog for FirestoreInteractionLog {
    #[tracing::instrument(skip(self, record), fields(interaction_id = %record.id))]
    async fn append(&self, record: &InteractionRecord) -> Result<(), InteractionLogError> {
        let response = self
            .auth
            .apply(self.client.post(&self.endpoint))
            .json(&self.commit_body(record))
            .send()
            .await
            .map_err(|e| InteractionLogError::ConnectionFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::CONFLICT {
            return Err(InteractionLogError::AlreadyExists(record.id.to_string()));
        }

        if !response.status().is_success() {
            return Err(InteractionLogError::WriteFailed(error_body(response).await));
        }

        tracing::debug!(collection = %self.collection, "Interaction written to Firestore");

        Ok(())
    }
}
