use std::sync::Arc;

use crate::application::ports::FeedbackStore;
use crate::domain::{AudioSample, InteractionId, PipelineStage, Scenario, StoragePath};

use super::coach_service::CoachService;

pub const AUDIO_GENERATION_FAILED: &str = "Audio feedback generation failed";

/// Third slot of an interaction result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackSlot {
    Ready { id: InteractionId, path: StoragePath },
    GenerationFailed,
    Absent,
}

impl FeedbackSlot {
    pub fn path(&self) -> Option<&StoragePath> {
        match self {
            FeedbackSlot::Ready { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// What the user sees after one submission. Every pipeline path ends here,
/// including failures, which carry their message in the text slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionOutcome {
    pub transcript: String,
    pub analysis: String,
    pub feedback: FeedbackSlot,
    pub stage: PipelineStage,
}

impl InteractionOutcome {
    fn failed(transcript: impl Into<String>, analysis: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            analysis: analysis.into(),
            feedback: FeedbackSlot::Absent,
            stage: PipelineStage::Failed,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.stage == PipelineStage::Failed
    }

    pub fn into_parts(self) -> (String, String, FeedbackSlot) {
        (self.transcript, self.analysis, self.feedback)
    }
}

/// Sequences the coach steps for one submission and short-circuits on the
/// first hard failure.
pub struct InteractionController {
    coach: Arc<CoachService>,
    feedback_store: Arc<dyn FeedbackStore>,
    user_id: String,
}

impl InteractionController {
    pub fn new(
        coach: Arc<CoachService>,
        feedback_store: Arc<dyn FeedbackStore>,
        user_id: String,
    ) -> Self {
        Self {
            coach,
            feedback_store,
            user_id,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    #[tracing::instrument(skip(self, audio), fields(has_audio = audio.is_some()))]
    pub async fn process(
        &self,
        audio: Option<AudioSample>,
        scenario: Option<Scenario>,
    ) -> InteractionOutcome {
        let outcome = self.run(audio, scenario).await;
        tracing::info!(stage = %outcome.stage, "Interaction finished");
        outcome
    }

    async fn run(&self, audio: Option<AudioSample>, scenario: Option<Scenario>) -> InteractionOutcome {
        enter(PipelineStage::Validating);
        let Some(audio) = audio else {
            return InteractionOutcome::failed("No audio provided", "Please record or upload audio");
        };
        let Some(scenario) = scenario else {
            return InteractionOutcome::failed("No scenario selected", "Please select a scenario");
        };

        enter(PipelineStage::Transcribing);
        let transcript = match self.coach.transcribe(&audio).await {
            Ok(transcript) => transcript,
            Err(e) => return InteractionOutcome::failed(e.to_string(), "Transcription failed"),
        };

        enter(PipelineStage::Analyzing);
        let analysis = match self.coach.analyze(&transcript, scenario).await {
            Ok(analysis) => analysis,
            Err(e) => return InteractionOutcome::failed(transcript.as_str(), e.to_string()),
        };

        enter(PipelineStage::Synthesizing);
        let feedback = match self.coach.synthesize(analysis.as_str()).await {
            Some(audio) => {
                let id = InteractionId::new();
                let path = StoragePath::feedback(&id);
                match self.feedback_store.store(&path, audio.into_bytes()).await {
                    Ok(bytes) => {
                        tracing::debug!(path = %path, bytes, "Feedback audio persisted");
                        FeedbackSlot::Ready { id, path }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, path = %path, "Failed to persist feedback audio");
                        FeedbackSlot::GenerationFailed
                    }
                }
            }
            None => FeedbackSlot::GenerationFailed,
        };

        enter(PipelineStage::Logging);
        self.coach
            .log_interaction(&self.user_id, scenario, &transcript, &analysis)
            .await;

        InteractionOutcome {
            transcript: transcript.as_str().to_string(),
            analysis: analysis.into_inner(),
            feedback,
            stage: PipelineStage::Done,
        }
    }
}

fn enter(stage: PipelineStage) {
    tracing::debug!(stage = %stage, "Entering pipeline stage");
}
