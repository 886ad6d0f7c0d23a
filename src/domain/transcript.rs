use std::fmt;

pub const NO_SPEECH_DETECTED: &str = "No speech detected in the audio";

/// Text recognized from one audio sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transcript {
    Speech(String),
    NoSpeechDetected,
}

impl Transcript {
    /// Joins recognized segments with single spaces. Blank results collapse to
    /// `NoSpeechDetected`.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = segments
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let trimmed = joined.trim();

        if trimmed.is_empty() {
            Transcript::NoSpeechDetected
        } else {
            Transcript::Speech(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Transcript::Speech(text) => text,
            Transcript::NoSpeechDetected => NO_SPEECH_DETECTED,
        }
    }

    pub fn is_speech(&self) -> bool {
        matches!(self, Transcript::Speech(_))
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
