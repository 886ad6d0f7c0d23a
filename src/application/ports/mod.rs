mod feedback_store;
mod generation_config;
mod interaction_log;
mod llm_client;
mod speech_synthesizer;
mod transcription_engine;
mod voice_config;

pub use feedback_store::{FeedbackStore, FeedbackStoreError};
pub use generation_config::GenerationConfig;
pub use interaction_log::{InteractionLog, InteractionLogError};
pub use llm_client::{LlmClient, LlmClientError};
pub use speech_synthesizer::{SpeechSynthesizer, SynthesisError};
pub use transcription_engine::{
    RecognitionAlternative, RecognitionSegment, TranscriptionEngine, TranscriptionError,
};
pub use voice_config::{AudioEncoding, SsmlGender, VoiceConfig};
