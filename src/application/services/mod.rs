mod analysis_prompt;
mod coach_error;
mod coach_service;
mod interaction_controller;

pub use analysis_prompt::analysis_prompt;
pub use coach_error::CoachError;
pub use coach_service::{CoachService, LogOutcome, MIN_TRANSCRIPT_CHARS};
pub use interaction_controller::{
    AUDIO_GENERATION_FAILED, FeedbackSlot, InteractionController, InteractionOutcome,
};
