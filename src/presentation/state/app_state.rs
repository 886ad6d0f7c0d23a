use std::sync::Arc;

use crate::application::ports::FeedbackStore;
use crate::application::services::InteractionController;

/// Process-scoped context shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub interaction_controller: Arc<InteractionController>,
    pub feedback_store: Arc<dyn FeedbackStore>,
    pub max_upload_bytes: usize,
}
