use std::sync::Arc;

use crate::application::ports::TranscriptionEngine;
use crate::infrastructure::google::GoogleAuth;
use crate::presentation::config::{ProviderSetting, ScaffoldConfig, SpeechSettings};

use super::google_speech_engine::GoogleSpeechEngine;
use super::mock_transcription_engine::MockTranscriptionEngine;

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    pub fn create(
        settings: &SpeechSettings,
        scaffold: &ScaffoldConfig,
        client: reqwest::Client,
        auth: GoogleAuth,
    ) -> Arc<dyn TranscriptionEngine> {
        match scaffold.resolve(settings.provider) {
            ProviderSetting::Google => Arc::new(GoogleSpeechEngine::new(
                client,
                settings.base_url.clone(),
                auth,
                settings.language_code.clone(),
                settings.model.clone(),
            )),
            ProviderSetting::Mock => Arc::new(MockTranscriptionEngine::new(scaffold.mock_delay())),
        }
    }
}
