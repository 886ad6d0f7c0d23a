use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::application::ports::FeedbackStoreError;
use crate::domain::{FeedbackAudio, InteractionId, StoragePath};
use crate::presentation::state::AppState;

use super::error_response::error_response;

#[tracing::instrument(skip(state))]
pub async fn feedback_handler(
    State(state): State<AppState>,
    Path(interaction_id): Path<String>,
) -> Response {
    let Ok(id) = interaction_id.parse::<InteractionId>() else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid feedback id");
    };

    match state.feedback_store.fetch(&StoragePath::feedback(&id)).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, FeedbackAudio::MIME_TYPE)], bytes).into_response(),
        Err(FeedbackStoreError::NotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, "Feedback audio not found")
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read feedback audio");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to read feedback audio")
        }
    }
}
