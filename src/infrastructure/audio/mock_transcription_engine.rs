use std::time::Duration;

use crate::application::ports::{RecognitionSegment, TranscriptionEngine, TranscriptionError};

const MOCK_TRANSCRIPT: &str = "Good morning, I would like to book a double room for two nights starting this Friday, preferably with a view of the sea.";

/// Offline stand-in used in scaffold mode.
pub struct MockTranscriptionEngine {
    delay: Duration,
}

impl MockTranscriptionEngine {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait::async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn recognize(
        &self,
        _audio_data: &[u8],
    ) -> Result<Vec<RecognitionSegment>, TranscriptionError> {
        tokio::time::sleep(self.delay).await;
        Ok(vec![RecognitionSegment::single(MOCK_TRANSCRIPT)])
    }
}
