use std::time::Duration;

use crate::application::ports::{SpeechSynthesizer, SynthesisError, VoiceConfig};

/// A single silent MPEG-1 Layer III frame header followed by padding.
const SILENT_MP3_FRAME: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];
const FRAME_LEN: usize = 417;

/// Offline stand-in used in scaffold mode. Produces a short silent clip.
pub struct MockSpeechSynthesizer {
    delay: Duration,
}

impl MockSpeechSynthesizer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait::async_trait]
impl SpeechSynthesizer for MockSpeechSynthesizer {
    async fn synthesize(
        &self,
        _text: &str,
        _voice: &VoiceConfig,
    ) -> Result<Vec<u8>, SynthesisError> {
        tokio::time::sleep(self.delay).await;

        let mut frame = vec![0u8; FRAME_LEN];
        frame[..SILENT_MP3_FRAME.len()].copy_from_slice(&SILENT_MP3_FRAME);
        Ok(frame.repeat(8))
    }
}
