/// Voice and audio settings for speech synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceConfig {
    pub language_code: String,
    pub voice_name: String,
    pub gender: SsmlGender,
    pub encoding: AudioEncoding,
    pub speaking_rate: f32,
    pub pitch: f32,
    pub volume_gain_db: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SsmlGender {
    Female,
    Male,
    Neutral,
}

impl SsmlGender {
    pub fn as_str(&self) -> &'static str {
        match self {
            SsmlGender::Female => "FEMALE",
            SsmlGender::Male => "MALE",
            SsmlGender::Neutral => "NEUTRAL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEncoding {
    Mp3,
    OggOpus,
    Linear16,
}

impl AudioEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioEncoding::Mp3 => "MP3",
            AudioEncoding::OggOpus => "OGG_OPUS",
            AudioEncoding::Linear16 => "LINEAR16",
        }
    }
}

impl VoiceConfig {
    /// US English neural female voice, MP3, slightly slowed down.
    pub fn feedback() -> Self {
        Self {
            language_code: "en-US".to_string(),
            voice_name: "en-US-Neural2-F".to_string(),
            gender: SsmlGender::Female,
            encoding: AudioEncoding::Mp3,
            speaking_rate: 0.95,
            pitch: 0.0,
            volume_gain_db: 0.0,
        }
    }
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self::feedback()
    }
}
