use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::application::ports::{SpeechSynthesizer, SynthesisError, VoiceConfig};
use crate::infrastructure::google::{GoogleAuth, error_body};

pub const DEFAULT_TTS_BASE_URL: &str = "https://texttospeech.googleapis.com";

/// Google Cloud Text-to-Speech, `text:synthesize`.
pub struct GoogleTtsClient {
    client: reqwest::Client,
    endpoint: String,
    auth: GoogleAuth,
}

impl GoogleTtsClient {
    pub fn new(client: reqwest::Client, base_url: Option<String>, auth: GoogleAuth) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_TTS_BASE_URL.to_string());
        Self {
            client,
            endpoint: format!("{}/v1/text:synthesize", base_url.trim_end_matches('/')),
            auth,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelection<'a>,
    audio_config: AudioConfig,
}

#[derive(Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelection<'a> {
    language_code: &'a str,
    name: &'a str,
    ssml_gender: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: &'static str,
    speaking_rate: f32,
    pitch: f32,
    volume_gain_db: f32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    audio_content: Option<String>,
}

#[async_trait]
impl SpeechSynthesizer for GoogleTtsClient {
    async fn synthesize(
        &self,
        text: &str,
        voice: &VoiceConfig,
    ) -> Result<Vec<u8>, SynthesisError> {
        let body = SynthesizeRequest {
            input: SynthesisInput { text },
            voice: VoiceSelection {
                language_code: &voice.language_code,
                name: &voice.voice_name,
                ssml_gender: voice.gender.as_str(),
            },
            audio_config: AudioConfig {
                audio_encoding: voice.encoding.as_str(),
                speaking_rate: voice.speaking_rate,
                pitch: voice.pitch,
                volume_gain_db: voice.volume_gain_db,
            },
        };

        tracing::debug!(voice = %voice.voice_name, chars = text.len(), "Sending text to Google Text-to-Speech");

        let response = self
            .auth
            .apply(self.client.post(&self.endpoint))
            .json(&body)
            .send()
            .await
            .map_err(|e| SynthesisError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            return Err(SynthesisError::ApiRequestFailed(error_body(response).await));
        }

        let parsed: SynthesizeResponse = response
            .json()
            .await
            .map_err(|e| SynthesisError::InvalidResponse(format!("parse response: {}", e)))?;

        let encoded = parsed
            .audio_content
            .ok_or_else(|| SynthesisError::InvalidResponse("missing audioContent".to_string()))?;

        let audio = STANDARD
            .decode(encoded.as_bytes())
            .map_err(|e| SynthesisError::DecodingFailed(e.to_string()))?;

        tracing::info!(bytes = audio.len(), "Google speech synthesis completed");

        Ok(audio)
    }
}
