use std::collections::HashMap;

use axum::{
    extract::{Form, State},
    response::Html,
};

use crate::domains::batch::{EntryInput, MAX_BATCH_ENTRIES};
use crate::server::app::AppState;
use crate::server::templates::{render_form, render_results};

/// `GET /`: the twelve-row entry form
pub async fn form_handler() -> Html<String> {
    Html(render_form(MAX_BATCH_ENTRIES))
}

/// `POST /generate`: run the submitted rows and show per-company results
pub async fn generate_handler(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Html<String> {
    let inputs = entries_from_form(&fields);
    tracing::info!(entries = inputs.len(), "Batch requested via form");
    let report = state.run_batch(inputs).await;
    Html(render_results(&report))
}

/// Collect `company_N` / `website_N` pairs in row order.
///
/// Rows past the form's twelve are still collected so the pipeline can
/// reject them with a reason instead of silently dropping them.
pub fn entries_from_form(fields: &HashMap<String, String>) -> Vec<EntryInput> {
    let mut rows: Vec<usize> = fields
        .keys()
        .filter_map(|k| k.strip_prefix("company_").or_else(|| k.strip_prefix("website_")))
        .filter_map(|n| n.parse().ok())
        .collect();
    rows.sort_unstable();
    rows.dedup();

    rows.into_iter()
        .map(|n| {
            let name = fields.get(&format!("company_{n}")).cloned().unwrap_or_default();
            let url = fields.get(&format!("website_{n}")).cloned().unwrap_or_default();
            EntryInput::new(name, url)
        })
        .collect()
}
