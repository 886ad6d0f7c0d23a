use std::sync::Arc;

use crate::application::ports::{InteractionLog, InteractionLogError};
use crate::infrastructure::google::GoogleAuth;
use crate::presentation::config::{InteractionLogProviderSetting, InteractionLogSettings, ScaffoldConfig};

use super::firestore_interaction_log::FirestoreInteractionLog;
use super::noop_interaction_log::NoopInteractionLog;
use super::pg_interaction_log::PgInteractionLog;
use super::pg_pool::connect_interaction_db;

pub struct InteractionLogFactory;

impl InteractionLogFactory {
    pub async fn create(
        settings: &InteractionLogSettings,
        scaffold: &ScaffoldConfig,
        client: reqwest::Client,
        auth: GoogleAuth,
        project_id: Option<&str>,
    ) -> Result<Arc<dyn InteractionLog>, InteractionLogError> {
        if scaffold.enabled {
            return Ok(Arc::new(NoopInteractionLog));
        }

        match settings.provider {
            InteractionLogProviderSetting::Firestore => {
                let project_id = project_id.ok_or_else(|| {
                    InteractionLogError::ConnectionFailed("google.project_id required".into())
                })?;
                Ok(Arc::new(FirestoreInteractionLog::new(
                    client,
                    settings.firestore_base_url.clone(),
                    auth,
                    project_id,
                    &settings.database_id,
                    settings.collection.clone(),
                )))
            }
            InteractionLogProviderSetting::Postgres => {
                let url = settings.database_url.as_deref().ok_or_else(|| {
                    InteractionLogError::ConnectionFailed("interaction_log.database_url required".into())
                })?;
                let pool = connect_interaction_db(url, settings.max_connections).await?;
                Ok(Arc::new(PgInteractionLog::new(pool)))
            }
            InteractionLogProviderSetting::Disabled => Ok(Arc::new(NoopInteractionLog)),
        }
    }
}
