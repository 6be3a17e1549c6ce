//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::batch::{BatchReport, EntryInput, Pipeline};
use crate::server::routes::{api_batch_handler, form_handler, generate_handler, health_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
    /// Held for the duration of a batch so only one runs at a time
    pub batch_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            batch_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Run a batch, waiting for any batch already in flight.
    ///
    /// The batch runs on its own task, so it still completes if the
    /// request that started it is dropped.
    pub async fn run_batch(&self, inputs: Vec<EntryInput>) -> BatchReport {
        let state = self.clone();
        let batch = tokio::spawn(async move {
            let _guard = state.batch_lock.lock().await;
            state.pipeline.run_batch(inputs).await
        });

        match batch.await {
            Ok(report) => report,
            Err(e) => {
                tracing::error!(error = %e, "Batch task failed");
                BatchReport::default()
            }
        }
    }
}

/// Build the Axum application router
pub fn build_app(pipeline: Pipeline) -> Router {
    let state = AppState::new(pipeline);

    // Local tool; the form posts to its own origin, the JSON route may be scripted
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(form_handler))
        .route("/generate", post(generate_handler))
        .route("/api/batch", post(api_batch_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
