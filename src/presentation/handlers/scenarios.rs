use axum::Json;
use serde::Serialize;

use crate::domain::Scenario;

#[derive(Serialize)]
pub struct ScenarioResponse {
    pub label: &'static str,
    pub description: &'static str,
}

pub async fn scenarios_handler() -> Json<Vec<ScenarioResponse>> {
    Json(
        Scenario::ALL
            .iter()
            .map(|s| ScenarioResponse {
                label: s.label(),
                description: s.description(),
            })
            .collect(),
    )
}
