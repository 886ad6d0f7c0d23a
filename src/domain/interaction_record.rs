use chrono::{Local, NaiveDate};

use super::interaction_id::InteractionId;
use super::scenario::Scenario;

/// One append-only log entry. The write timestamp is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionRecord {
    pub id: InteractionId,
    pub user_id: String,
    pub scenario: Scenario,
    pub transcript: String,
    pub analysis: String,
    pub session_date: NaiveDate,
}

impl InteractionRecord {
    pub fn new(
        user_id: impl Into<String>,
        scenario: Scenario,
        transcript: impl Into<String>,
        analysis: impl Into<String>,
    ) -> Self {
        Self {
            id: InteractionId::new(),
            user_id: user_id.into(),
            scenario,
            transcript: transcript.into(),
            analysis: analysis.into(),
            session_date: Local::now().date_naive(),
        }
    }

    /// Session date in `YYYY-MM-DD` form.
    pub fn session_date_string(&self) -> String {
        self.session_date.format("%Y-%m-%d").to_string()
    }
}
