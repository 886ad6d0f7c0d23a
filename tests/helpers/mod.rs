#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use bytes::Bytes;

use verba::application::ports::{
    FeedbackStore, FeedbackStoreError, GenerationConfig, InteractionLog, InteractionLogError,
    LlmClient, LlmClientError, RecognitionSegment, SpeechSynthesizer, SynthesisError,
    TranscriptionEngine, TranscriptionError, VoiceConfig,
};
use verba::application::services::CoachService;
use verba::domain::{InteractionRecord, StoragePath};

pub mod mock_server;

pub const CLEAR_SPEECH: [&str; 2] = [
    "Thank you for having me today.",
    "I have five years of experience leading small engineering teams.",
];

pub const MOCK_ANALYSIS: &str = "1. Clarity and Effectiveness: clear.\n2. Tone and Professionalism: polite.\n3. Areas for Improvement: slow down.\n4. Example: \"I led a team of four.\"";

pub const FAKE_MP3: &[u8] = &[0xFF, 0xFB, 0x90, 0x64, 0x00, 0x00, 0x00, 0x00];

pub struct StubTranscriptionEngine {
    pub calls: AtomicUsize,
    result: Result<Vec<RecognitionSegment>, String>,
}

impl StubTranscriptionEngine {
    pub fn speech(segments: &[&str]) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            result: Ok(segments.iter().map(|s| RecognitionSegment::single(*s)).collect()),
        }
    }

    pub fn segments(segments: Vec<RecognitionSegment>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            result: Ok(segments),
        }
    }

    pub fn silence() -> Self {
        Self::segments(Vec::new())
    }

    pub fn failing(message: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            result: Err(message.to_string()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TranscriptionEngine for StubTranscriptionEngine {
    async fn recognize(
        &self,
        _audio_data: &[u8],
    ) -> Result<Vec<RecognitionSegment>, TranscriptionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result
            .clone()
            .map_err(TranscriptionError::ApiRequestFailed)
    }
}

pub struct StubLlmClient {
    pub calls: AtomicUsize,
    pub last_prompt: Mutex<Option<String>>,
    pub last_config: Mutex<Option<GenerationConfig>>,
    result: Result<String, String>,
}

impl StubLlmClient {
    pub fn answering(text: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
            last_config: Mutex::new(None),
            result: Ok(text.to_string()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
            last_config: Mutex::new(None),
            result: Err(message.to_string()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl LlmClient for StubLlmClient {
    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, LlmClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        *self.last_config.lock().unwrap() = Some(*config);
        self.result.clone().map_err(LlmClientError::ApiRequestFailed)
    }
}

pub struct StubSpeechSynthesizer {
    pub calls: AtomicUsize,
    pub last_voice: Mutex<Option<VoiceConfig>>,
    result: Result<Vec<u8>, String>,
}

impl StubSpeechSynthesizer {
    pub fn producing(audio: &[u8]) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            last_voice: Mutex::new(None),
            result: Ok(audio.to_vec()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            last_voice: Mutex::new(None),
            result: Err(message.to_string()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl SpeechSynthesizer for StubSpeechSynthesizer {
    async fn synthesize(
        &self,
        _text: &str,
        voice: &VoiceConfig,
    ) -> Result<Vec<u8>, SynthesisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_voice.lock().unwrap() = Some(voice.clone());
        self.result.clone().map_err(SynthesisError::ApiRequestFailed)
    }
}

pub struct RecordingInteractionLog {
    pub records: Mutex<Vec<InteractionRecord>>,
    pub attempts: AtomicUsize,
    fail: bool,
}

impl RecordingInteractionLog {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            attempts: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn attempt_count(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn records(&self) -> Vec<InteractionRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl InteractionLog for RecordingInteractionLog {
    async fn append(&self, record: &InteractionRecord) -> Result<(), InteractionLogError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(InteractionLogError::ConnectionFailed(
                "document store unavailable".to_string(),
            ));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

pub struct FailingFeedbackStore;

#[async_trait::async_trait]
impl FeedbackStore for FailingFeedbackStore {
    async fn store(&self, _path: &StoragePath, _data: Bytes) -> Result<u64, FeedbackStoreError> {
        Err(FeedbackStoreError::UploadFailed("disk full".to_string()))
    }

    async fn fetch(&self, path: &StoragePath) -> Result<Bytes, FeedbackStoreError> {
        Err(FeedbackStoreError::NotFound(path.to_string()))
    }
}

/// Stubs wired into one `CoachService`, kept around for call assertions.
pub struct Harness {
    pub engine: Arc<StubTranscriptionEngine>,
    pub llm: Arc<StubLlmClient>,
    pub tts: Arc<StubSpeechSynthesizer>,
    pub log: Arc<RecordingInteractionLog>,
    pub coach: Arc<CoachService>,
}

impl Harness {
    pub fn new(
        engine: StubTranscriptionEngine,
        llm: StubLlmClient,
        tts: StubSpeechSynthesizer,
        log: RecordingInteractionLog,
    ) -> Self {
        let engine = Arc::new(engine);
        let llm = Arc::new(llm);
        let tts = Arc::new(tts);
        let log = Arc::new(log);
        let coach = Arc::new(CoachService::new(
            engine.clone(),
            llm.clone(),
            tts.clone(),
            log.clone(),
        ));
        Self {
            engine,
            llm,
            tts,
            log,
            coach,
        }
    }

    pub fn happy() -> Self {
        Self::new(
            StubTranscriptionEngine::speech(&CLEAR_SPEECH),
            StubLlmClient::answering(MOCK_ANALYSIS),
            StubSpeechSynthesizer::producing(FAKE_MP3),
            RecordingInteractionLog::new(),
        )
    }

    pub fn external_calls(&self) -> usize {
        self.engine.call_count()
            + self.llm.call_count()
            + self.tts.call_count()
            + self.log.attempt_count()
    }
}
