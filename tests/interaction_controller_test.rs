mod helpers;

use std::sync::Arc;

use verba::application::ports::FeedbackStore;
use verba::application::services::{FeedbackSlot, InteractionController};
use verba::domain::{AudioSample, NO_SPEECH_DETECTED, PipelineStage, Scenario};
use verba::infrastructure::storage::LocalFeedbackStore;

use helpers::{
    CLEAR_SPEECH, FAKE_MP3, FailingFeedbackStore, Harness, MOCK_ANALYSIS,
    RecordingInteractionLog, StubLlmClient, StubSpeechSynthesizer, StubTranscriptionEngine,
};

const USER_ID: &str = "demo_user";

fn create_store() -> (tempfile::TempDir, Arc<LocalFeedbackStore>) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = Arc::new(LocalFeedbackStore::new(dir.path().to_path_buf()).unwrap());
    (dir, store)
}

fn controller(harness: &Harness, store: Arc<dyn FeedbackStore>) -> InteractionController {
    InteractionController::new(harness.coach.clone(), store, USER_ID.to_string())
}

fn audio() -> Option<AudioSample> {
    Some(AudioSample::from_bytes(vec![7u8; 64]))
}

#[tokio::test]
async fn given_no_audio_when_processing_then_returns_error_tuple_without_external_calls() {
    let harness = Harness::happy();
    let (_dir, store) = create_store();

    let outcome = controller(&harness, store)
        .process(None, Some(Scenario::HotelRoomBooking))
        .await;

    assert_eq!(outcome.transcript, "No audio provided");
    assert_eq!(outcome.analysis, "Please record or upload audio");
    assert_eq!(outcome.feedback, FeedbackSlot::Absent);
    assert_eq!(outcome.stage, PipelineStage::Failed);
    assert_eq!(harness.external_calls(), 0);
}

#[tokio::test]
async fn given_no_scenario_when_processing_then_returns_error_tuple_without_external_calls() {
    let harness = Harness::happy();
    let (_dir, store) = create_store();

    let outcome = controller(&harness, store).process(audio(), None).await;

    assert_eq!(outcome.transcript, "No scenario selected");
    assert_eq!(outcome.analysis, "Please select a scenario");
    assert_eq!(outcome.feedback, FeedbackSlot::Absent);
    assert_eq!(harness.external_calls(), 0);
}

#[tokio::test]
async fn given_unreadable_audio_path_when_processing_then_reports_transcription_failed() {
    let harness = Harness::happy();
    let (_dir, store) = create_store();

    let outcome = controller(&harness, store)
        .process(
            Some(AudioSample::from_path("/no/such/recording.wav")),
            Some(Scenario::RetailNegotiation),
        )
        .await;

    assert_eq!(outcome.transcript, "Error: Invalid or missing audio file path");
    assert_eq!(outcome.analysis, "Transcription failed");
    assert_eq!(outcome.feedback, FeedbackSlot::Absent);
    assert_eq!(harness.external_calls(), 0);
}

#[tokio::test]
async fn given_transcription_failure_when_processing_then_skips_analysis_and_synthesis() {
    let harness = Harness::new(
        StubTranscriptionEngine::failing("deadline exceeded"),
        StubLlmClient::answering(MOCK_ANALYSIS),
        StubSpeechSynthesizer::producing(FAKE_MP3),
        RecordingInteractionLog::new(),
    );
    let (_dir, store) = create_store();

    let outcome = controller(&harness, store)
        .process(audio(), Some(Scenario::JobInterviewPreparation))
        .await;

    assert!(outcome.transcript.starts_with("Error transcribing audio:"));
    assert!(outcome.transcript.contains("deadline exceeded"));
    assert_eq!(outcome.analysis, "Transcription failed");
    assert_eq!(outcome.feedback, FeedbackSlot::Absent);
    assert!(outcome.is_failure());
    assert_eq!(harness.llm.call_count(), 0);
    assert_eq!(harness.tts.call_count(), 0);
    assert_eq!(harness.log.attempt_count(), 0);
}

#[tokio::test]
async fn given_analysis_failure_when_processing_then_keeps_transcript_and_skips_synthesis() {
    let harness = Harness::new(
        StubTranscriptionEngine::speech(&CLEAR_SPEECH),
        StubLlmClient::failing("safety filter"),
        StubSpeechSynthesizer::producing(FAKE_MP3),
        RecordingInteractionLog::new(),
    );
    let (_dir, store) = create_store();

    let outcome = controller(&harness, store)
        .process(audio(), Some(Scenario::JobInterviewPreparation))
        .await;

    assert_eq!(outcome.transcript, CLEAR_SPEECH.join(" "));
    assert!(outcome.analysis.starts_with("Error analyzing communication:"));
    assert_eq!(outcome.feedback, FeedbackSlot::Absent);
    assert_eq!(outcome.stage, PipelineStage::Failed);
    assert_eq!(harness.tts.call_count(), 0);
}

#[tokio::test]
async fn given_transcript_containing_word_error_when_processing_then_not_treated_as_failure() {
    let harness = Harness::new(
        StubTranscriptionEngine::speech(&["Error handling is the part of my job I enjoy most."]),
        StubLlmClient::answering(MOCK_ANALYSIS),
        StubSpeechSynthesizer::producing(FAKE_MP3),
        RecordingInteractionLog::new(),
    );
    let (_dir, store) = create_store();

    let outcome = controller(&harness, store)
        .process(audio(), Some(Scenario::JobInterviewPreparation))
        .await;

    assert_eq!(outcome.stage, PipelineStage::Done);
    assert_eq!(outcome.analysis, MOCK_ANALYSIS);
    assert_eq!(harness.llm.call_count(), 1);
}

#[tokio::test]
async fn given_silence_when_processing_restaurant_scenario_then_returns_sentinel_and_too_short_error() {
    let harness = Harness::new(
        StubTranscriptionEngine::silence(),
        StubLlmClient::answering(MOCK_ANALYSIS),
        StubSpeechSynthesizer::producing(FAKE_MP3),
        RecordingInteractionLog::new(),
    );
    let (_dir, store) = create_store();

    let outcome = controller(&harness, store)
        .process(audio(), Some(Scenario::RestaurantInteraction))
        .await;

    assert_eq!(outcome.transcript, NO_SPEECH_DETECTED);
    assert_eq!(
        outcome.analysis,
        "Error: Transcript too short for meaningful analysis"
    );
    assert_eq!(outcome.feedback, FeedbackSlot::Absent);
    assert_eq!(harness.engine.call_count(), 1);
    assert_eq!(harness.llm.call_count(), 0);
}

#[tokio::test]
async fn given_synthesis_failure_when_processing_then_delivers_text_and_marks_audio_failed() {
    let harness = Harness::new(
        StubTranscriptionEngine::speech(&CLEAR_SPEECH),
        StubLlmClient::answering(MOCK_ANALYSIS),
        StubSpeechSynthesizer::failing("voice not found"),
        RecordingInteractionLog::new(),
    );
    let (_dir, store) = create_store();

    let outcome = controller(&harness, store)
        .process(audio(), Some(Scenario::ProfessionalIntroduction))
        .await;

    assert_eq!(outcome.transcript, CLEAR_SPEECH.join(" "));
    assert_eq!(outcome.analysis, MOCK_ANALYSIS);
    assert_eq!(outcome.feedback, FeedbackSlot::GenerationFailed);
    assert_eq!(outcome.stage, PipelineStage::Done);
    assert!(!outcome.is_failure());
    assert_eq!(harness.log.records().len(), 1);
}

#[tokio::test]
async fn given_failing_feedback_store_when_processing_then_degrades_audio_slot_only() {
    let harness = Harness::happy();

    let outcome = controller(&harness, Arc::new(FailingFeedbackStore))
        .process(audio(), Some(Scenario::HotelRoomBooking))
        .await;

    assert_eq!(outcome.analysis, MOCK_ANALYSIS);
    assert_eq!(outcome.feedback, FeedbackSlot::GenerationFailed);
    assert_eq!(outcome.stage, PipelineStage::Done);
}

#[tokio::test]
async fn given_failing_interaction_log_when_processing_then_outcome_matches_healthy_log() {
    let healthy = Harness::happy();
    let faulty = Harness::new(
        StubTranscriptionEngine::speech(&CLEAR_SPEECH),
        StubLlmClient::answering(MOCK_ANALYSIS),
        StubSpeechSynthesizer::producing(FAKE_MP3),
        RecordingInteractionLog::failing(),
    );
    let (_dir_a, store_a) = create_store();
    let (_dir_b, store_b) = create_store();

    let expected = controller(&healthy, store_a)
        .process(audio(), Some(Scenario::RetailNegotiation))
        .await;
    let actual = controller(&faulty, store_b)
        .process(audio(), Some(Scenario::RetailNegotiation))
        .await;

    assert_eq!(faulty.log.attempt_count(), 1);
    assert_eq!(actual.transcript, expected.transcript);
    assert_eq!(actual.analysis, expected.analysis);
    assert_eq!(actual.stage, expected.stage);
    assert!(matches!(actual.feedback, FeedbackSlot::Ready { .. }));
}

#[tokio::test]
async fn given_clear_speech_for_job_interview_when_processing_then_feedback_file_is_readable() {
    let harness = Harness::happy();
    let (_dir, store) = create_store();

    let outcome = controller(&harness, store.clone())
        .process(audio(), Some(Scenario::JobInterviewPreparation))
        .await;

    assert_eq!(outcome.stage, PipelineStage::Done);
    assert!(!outcome.transcript.is_empty());
    assert_eq!(outcome.transcript, outcome.transcript.trim());
    assert!(!outcome.analysis.is_empty());

    let path = outcome.feedback.path().expect("feedback audio stored").clone();
    let on_disk = std::fs::read(store.local_path(&path)).unwrap();
    assert_eq!(on_disk, FAKE_MP3);

    let records = harness.log.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].user_id, USER_ID);
    assert_eq!(records[0].scenario, Scenario::JobInterviewPreparation);
}
