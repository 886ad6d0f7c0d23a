mod analysis;
mod audio_sample;
mod feedback_audio;
mod interaction_id;
mod interaction_record;
mod pipeline_stage;
mod scenario;
mod storage_path;
mod transcript;

pub use analysis::Analysis;
pub use audio_sample::AudioSample;
pub use feedback_audio::FeedbackAudio;
pub use interaction_id::InteractionId;
pub use interaction_record::InteractionRecord;
pub use pipeline_stage::PipelineStage;
pub use scenario::Scenario;
pub use storage_path::StoragePath;
pub use transcript::{NO_SPEECH_DETECTED, Transcript};
