use axum::{extract::State, Json};
use serde::Deserialize;

use crate::domains::batch::{BatchReport, EntryInput};
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    #[serde(default)]
    pub entries: Vec<EntryInput>,
}

/// `POST /api/batch`: run one batch and return the report as JSON
pub async fn api_batch_handler(
    State(state): State<AppState>,
    Json(request): Json<BatchRequest>,
) -> Json<BatchReport> {
    tracing::info!(entries = request.entries.len(), "Batch requested via API");
    Json(state.run_batch(request.entries).await)
}
