use std::fmt;

use super::interaction_id::InteractionId;

const FEEDBACK_PREFIX: &str = "feedback";

/// Location of a persisted feedback file, relative to the store root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn feedback(interaction_id: &InteractionId) -> Self {
        Self(format!("{}/{}.mp3", FEEDBACK_PREFIX, interaction_id.as_uuid()))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
