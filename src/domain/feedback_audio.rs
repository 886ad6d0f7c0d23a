use bytes::Bytes;

/// MP3-encoded speech rendering of an analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackAudio(Bytes);

impl FeedbackAudio {
    pub const MIME_TYPE: &'static str = "audio/mpeg";

    pub fn new(data: impl Into<Bytes>) -> Self {
        Self(data.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}
