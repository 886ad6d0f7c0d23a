use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::{AUDIO_GENERATION_FAILED, FeedbackSlot, InteractionOutcome};
use crate::domain::{AudioSample, Scenario};
use crate::presentation::state::AppState;

use super::error_response::error_response;

pub const AUDIO_FIELD: &str = "audio";
pub const SCENARIO_FIELD: &str = "scenario";

#[derive(Debug, Serialize)]
pub struct InteractionResponse {
    pub transcript: String,
    pub analysis: String,
    /// Feedback URL, the generation-failed marker, or null.
    pub feedback_audio: Option<String>,
    pub feedback_status: &'static str,
    pub stage: &'static str,
}

impl From<InteractionOutcome> for InteractionResponse {
    fn from(outcome: InteractionOutcome) -> Self {
        let (feedback_audio, feedback_status) = match &outcome.feedback {
            FeedbackSlot::Ready { id, .. } => (Some(format!("/api/v1/feedback/{}", id)), "ready"),
            FeedbackSlot::GenerationFailed => {
                (Some(AUDIO_GENERATION_FAILED.to_string()), "generation_failed")
            }
            FeedbackSlot::Absent => (None, "absent"),
        };

        Self {
            stage: outcome.stage.as_str(),
            transcript: outcome.transcript,
            analysis: outcome.analysis,
            feedback_audio,
            feedback_status,
        }
    }
}

/// Accepts `audio` (file) and `scenario` (label) parts. A zero-length audio
/// part counts as no audio.
#[tracing::instrument(skip(state, multipart))]
pub async fn interaction_handler(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut audio: Option<AudioSample> = None;
    let mut scenario_label: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read multipart: {}", e),
                );
            }
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(AUDIO_FIELD) => {
                let filename = field.file_name().unwrap_or("unknown").to_string();
                let data = match field.bytes().await {
                    Ok(d) => d,
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read audio bytes");
                        return error_response(
                            StatusCode::BAD_REQUEST,
                            format!("Failed to read audio: {}", e),
                        );
                    }
                };
                tracing::debug!(filename = %filename, bytes = data.len(), "Audio received");
                if !data.is_empty() {
                    audio = Some(AudioSample::from_bytes(data));
                }
            }
            Some(SCENARIO_FIELD) => {
                let text = match field.text().await {
                    Ok(t) => t,
                    Err(e) => {
                        return error_response(
                            StatusCode::BAD_REQUEST,
                            format!("Failed to read scenario: {}", e),
                        );
                    }
                };
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    scenario_label = Some(trimmed.to_string());
                }
            }
            other => tracing::debug!(field = ?other, "Ignoring unknown multipart field"),
        }
    }

    let scenario = match scenario_label.map(|l| l.parse::<Scenario>()).transpose() {
        Ok(scenario) => scenario,
        Err(e) => {
            tracing::warn!(error = %e, "Rejecting unknown scenario");
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, e);
        }
    };

    let outcome = state.interaction_controller.process(audio, scenario).await;

    (StatusCode::OK, Json(InteractionResponse::from(outcome))).into_response()
}
