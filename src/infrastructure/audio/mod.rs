mod google_speech_engine;
mod mock_transcription_engine;
mod transcription_engine_factory;

pub use google_speech_engine::{DEFAULT_SPEECH_BASE_URL, GoogleSpeechEngine};
pub use mock_transcription_engine::MockTranscriptionEngine;
pub use transcription_engine_factory::TranscriptionEngineFactory;
