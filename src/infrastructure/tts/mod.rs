mod google_tts_client;
mod mock_speech_synthesizer;
mod speech_synthesizer_factory;

pub use google_tts_client::{DEFAULT_TTS_BASE_URL, GoogleTtsClient};
pub use mock_speech_synthesizer::MockSpeechSynthesizer;
pub use speech_synthesizer_factory::SpeechSynthesizerFactory;
