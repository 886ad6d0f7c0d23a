use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::infrastructure::google::GoogleAuth;
use crate::presentation::config::{LlmSettings, ProviderSetting, ScaffoldConfig};

use super::gemini_client::GeminiClient;
use super::mock_llm_client::MockLlmClient;

pub struct LlmClientFactory;

impl LlmClientFactory {
    pub fn create(
        settings: &LlmSettings,
        scaffold: &ScaffoldConfig,
        client: reqwest::Client,
        auth: GoogleAuth,
    ) -> Arc<dyn LlmClient> {
        match scaffold.resolve(settings.provider) {
            ProviderSetting::Google => Arc::new(GeminiClient::new(
                client,
                settings.base_url.clone(),
                auth,
                settings.model.clone(),
            )),
            ProviderSetting::Mock => Arc::new(MockLlmClient::new(scaffold.mock_delay())),
        }
    }
}
