use async_trait::async_trait;

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    /// Returns recognized segments in recognizer order. An empty vector means
    /// the audio contained no speech.
    async fn recognize(&self, audio_data: &[u8])
    -> Result<Vec<RecognitionSegment>, TranscriptionError>;
}

/// One recognized stretch of audio with its ranked alternatives, best first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecognitionSegment {
    pub alternatives: Vec<RecognitionAlternative>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionAlternative {
    pub transcript: String,
    pub confidence: Option<f32>,
}

impl RecognitionSegment {
    pub fn single(transcript: impl Into<String>) -> Self {
        Self {
            alternatives: vec![RecognitionAlternative {
                transcript: transcript.into(),
                confidence: None,
            }],
        }
    }

    pub fn best(&self) -> Option<&str> {
        self.alternatives.first().map(|a| a.transcript.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
