use std::sync::Arc;

use crate::application::ports::SpeechSynthesizer;
use crate::infrastructure::google::GoogleAuth;
use crate::presentation::config::{ProviderSetting, ScaffoldConfig, TtsSettings};

use super::google_tts_client::GoogleTtsClient;
use super::mock_speech_synthesizer::MockSpeechSynthesizer;

pub struct SpeechSynthesizerFactory;

impl SpeechSynthesizerFactory {
    pub fn create(
        settings: &TtsSettings,
        scaffold: &ScaffoldConfig,
        client: reqwest::Client,
        auth: GoogleAuth,
    ) -> Arc<dyn SpeechSynthesizer> {
        match scaffold.resolve(settings.provider) {
            ProviderSetting::Google => {
                Arc::new(GoogleTtsClient::new(client, settings.base_url.clone(), auth))
            }
            ProviderSetting::Mock => Arc::new(MockSpeechSynthesizer::new(scaffold.mock_delay())),
        }
    }
}
