use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    RecognitionAlternative, RecognitionSegment, TranscriptionEngine, TranscriptionError,
};
use crate::infrastructure::google::{GoogleAuth, error_body};

pub const DEFAULT_SPEECH_BASE_URL: &str = "https://speech.googleapis.com";

/// Google Cloud Speech-to-Text, synchronous `speech:recognize`.
pub struct GoogleSpeechEngine {
    client: reqwest::Client,
    endpoint: String,
    auth: GoogleAuth,
    language_code: String,
    model: String,
}

impl GoogleSpeechEngine {
    pub fn new(
        client: reqwest::Client,
        base_url: Option<String>,
        auth: GoogleAuth,
        language_code: String,
        model: String,
    ) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_SPEECH_BASE_URL.to_string());
        Self {
            client,
            endpoint: format!(
                "{}/v1p1beta1/speech:recognize",
                base_url.trim_end_matches('/')
            ),
            auth,
            language_code,
            model,
        }
    }
}

#[derive(Serialize)]
struct RecognizeRequest<'a> {
    config: RecognitionConfig<'a>,
    audio: RecognitionAudio,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig<'a> {
    language_code: &'a str,
    enable_automatic_punctuation: bool,
    use_enhanced: bool,
    model: &'a str,
    audio_channel_count: u32,
    enable_word_time_offsets: bool,
}

#[derive(Serialize)]
struct RecognitionAudio {
    content: String,
}

#[derive(Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<RecognitionResult>,
}

#[derive(Deserialize)]
struct RecognitionResult {
    #[serde(default)]
    alternatives: Vec<Alternative>,
}

#[derive(Deserialize)]
struct Alternative {
    #[serde(default)]
    transcript: String,
    confidence: Option<f32>,
}

#[async_trait]
impl TranscriptionEngine for GoogleSpeechEngine {
    async fn recognize(
        &self,
        audio_data: &[u8],
    ) -> Result<Vec<RecognitionSegment>, TranscriptionError> {
        let body = RecognizeRequest {
            config: RecognitionConfig {
                language_code: &self.language_code,
                enable_automatic_punctuation: true,
                use_enhanced: true,
                model: &self.model,
                audio_channel_count: 1,
                enable_word_time_offsets: true,
            },
            audio: RecognitionAudio {
                content: STANDARD.encode(audio_data),
            },
        };

        tracing::debug!(model = %self.model, bytes = audio_data.len(), "Sending audio to Google Speech-to-Text");

        let response = self
            .auth
            .apply(self.client.post(&self.endpoint))
            .json(&body)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            return Err(TranscriptionError::ApiRequestFailed(
                error_body(response).await,
            ));
        }

        let parsed: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(format!("parse response: {}", e)))?;

        let segments: Vec<RecognitionSegment> = parsed
            .results
            .into_iter()
            .map(|result| RecognitionSegment {
                alternatives: result
                    .alternatives
                    .into_iter()
                    .map(|a| RecognitionAlternative {
                        transcript: a.transcript,
                        confidence: a.confidence,
                    })
                    .collect(),
            })
            .collect();

        tracing::info!(segments = segments.len(), "Google transcription completed");

        Ok(segments)
    }
}
