mod error_response;
mod feedback;
mod health;
mod interactions;
mod scenarios;

pub use error_response::ErrorResponse;
pub use feedback::feedback_handler;
pub use health::health_handler;
pub use interactions::{AUDIO_FIELD, InteractionResponse, SCENARIO_FIELD, interaction_handler};
pub use scenarios::scenarios_handler;
