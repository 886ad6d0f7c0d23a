use std::sync::Arc;

use crate::application::ports::{
    GenerationConfig, InteractionLog, LlmClient, RecognitionSegment, SpeechSynthesizer,
    TranscriptionEngine, VoiceConfig,
};
use crate::domain::{Analysis, AudioSample, FeedbackAudio, InteractionRecord, Scenario, Transcript};
use crate::infrastructure::observability::sanitize_prompt;

use super::analysis_prompt::analysis_prompt;
use super::coach_error::CoachError;

pub const MIN_TRANSCRIPT_CHARS: usize = 10;

const INVALID_AUDIO: &str = "Invalid or missing audio file path";
const MISSING_TRANSCRIPT: &str = "Missing transcript or scenario";
const TRANSCRIPT_TOO_SHORT: &str = "Transcript too short for meaningful analysis";
const NO_ANALYSIS: &str = "No analysis generated";

/// Result of a best-effort log write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutcome {
    Recorded,
    Dropped,
}

/// Holds the external service clients for the lifetime of the process and
/// wraps each of them behind a uniform error contract.
pub struct CoachService {
    transcription_engine: Arc<dyn TranscriptionEngine>,
    llm_client: Arc<dyn LlmClient>,
    speech_synthesizer: Arc<dyn SpeechSynthesizer>,
    interaction_log: Arc<dyn InteractionLog>,
    generation_config: GenerationConfig,
    voice: VoiceConfig,
}

impl CoachService {
    pub fn new(
        transcription_engine: Arc<dyn TranscriptionEngine>,
        llm_client: Arc<dyn LlmClient>,
        speech_synthesizer: Arc<dyn SpeechSynthesizer>,
        interaction_log: Arc<dyn InteractionLog>,
    ) -> Self {
        Self {
            transcription_engine,
            llm_client,
            speech_synthesizer,
            interaction_log,
            generation_config: GenerationConfig::analysis(),
            voice: VoiceConfig::feedback(),
        }
    }

    #[tracing::instrument(skip_all)]
    pub async fn transcribe(&self, audio: &AudioSample) -> Result<Transcript, CoachError> {
        let data = audio.read().await.map_err(|e| {
            tracing::warn!(error = %e, "Rejecting unreadable audio sample");
            CoachError::InvalidInput(INVALID_AUDIO.to_string())
        })?;

        tracing::debug!(bytes = data.len(), "Sending audio for recognition");

        let segments = self
            .transcription_engine
            .recognize(&data)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Speech recognition failed");
                CoachError::TranscriptionFailure(e.to_string())
            })?;

        let transcript =
            Transcript::from_segments(segments.iter().filter_map(RecognitionSegment::best));

        tracing::info!(
            segments = segments.len(),
            speech = transcript.is_speech(),
            transcript = %sanitize_prompt(transcript.as_str()),
            "Transcription completed"
        );

        Ok(transcript)
    }

    #[tracing::instrument(skip(self, transcript), fields(scenario = %scenario))]
    pub async fn analyze(
        &self,
        transcript: &Transcript,
        scenario: Scenario,
    ) -> Result<Analysis, CoachError> {
        let text = match transcript {
            Transcript::Speech(text) if text.is_empty() => {
                return Err(CoachError::InvalidInput(MISSING_TRANSCRIPT.to_string()));
            }
            Transcript::Speech(text) => text,
            Transcript::NoSpeechDetected => {
                return Err(CoachError::InvalidInput(TRANSCRIPT_TOO_SHORT.to_string()));
            }
        };

        if text.trim().chars().count() < MIN_TRANSCRIPT_CHARS {
            tracing::debug!(transcript = %sanitize_prompt(text), "Transcript below length floor");
            return Err(CoachError::InvalidInput(TRANSCRIPT_TOO_SHORT.to_string()));
        }

        let prompt = analysis_prompt(scenario, text);

        let generated = self
            .llm_client
            .generate(&prompt, &self.generation_config)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Analysis generation failed");
                CoachError::AnalysisFailure(e.to_string())
            })?;

        if generated.trim().is_empty() {
            tracing::warn!("Model returned no analysis text");
            return Err(CoachError::AnalysisFailure(NO_ANALYSIS.to_string()));
        }

        tracing::info!(chars = generated.len(), "Analysis generated");

        Ok(Analysis::new(generated))
    }

    /// Renders feedback as speech. Failures are logged and yield `None`.
    #[tracing::instrument(skip_all)]
    pub async fn synthesize(&self, text: &str) -> Option<FeedbackAudio> {
        if text.trim().is_empty() {
            tracing::warn!("Skipping speech synthesis for empty text");
            return None;
        }

        match self.speech_synthesizer.synthesize(text, &self.voice).await {
            Ok(audio) if audio.is_empty() => {
                tracing::warn!("Speech synthesis returned no audio");
                None
            }
            Ok(audio) => {
                tracing::info!(bytes = audio.len(), voice = %self.voice.voice_name, "Feedback audio generated");
                Some(FeedbackAudio::new(audio))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error generating audio feedback");
                None
            }
        }
    }

    /// Appends one interaction record. Failures are logged and never reach
    /// the caller as errors.
    #[tracing::instrument(skip(self, transcript, analysis), fields(scenario = %scenario))]
    pub async fn log_interaction(
        &self,
        user_id: &str,
        scenario: Scenario,
        transcript: &Transcript,
        analysis: &Analysis,
    ) -> LogOutcome {
        let record = InteractionRecord::new(user_id, scenario, transcript.as_str(), analysis.as_str());

        match self.interaction_log.append(&record).await {
            Ok(()) => {
                tracing::debug!(interaction_id = %record.id, "Interaction logged");
                LogOutcome::Recorded
            }
            Err(e) => {
                tracing::warn!(error = %e, interaction_id = %record.id, "Error logging interaction");
                LogOutcome::Dropped
            }
        }
    }
}
