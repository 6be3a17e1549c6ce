//! Minimal client for a locally running Ollama service.
//!
//! Only the non-streaming chat endpoint and the model listing are wrapped.
//! Every call blocks until the full reply has been received.
//!
//! # Example
//!
//! ```rust,ignore
//! use ollama_client::{OllamaClient, ChatRequest, Message};
//!
//! let client = OllamaClient::local().with_timeout(Duration::from_secs(300));
//!
//! let response = client
//!     .chat(ChatRequest::new("llama3.1:latest").message(Message::user("Hello!")))
//!     .await?;
//! println!("{}", response.content);
//! ```

pub mod error;
pub mod types;

pub use error::{OllamaError, Result};
pub use types::*;

use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

/// Default address of a local Ollama install.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Ollama API client.
#[derive(Clone)]
pub struct OllamaClient {
    http_client: Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl OllamaClient {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    /// Create a client for the default local address.
    pub fn local() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Bound every request by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Chat completion.
    ///
    /// Sends the conversation with `stream: false` and waits for the reply.
    pub async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        let start = Instant::now();

        let mut builder = self
            .http_client
            .post(format!("{}/api/chat", self.base_url))
            .json(&request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(error = %e, model = %request.model, "Ollama request failed");
            self.map_send_error(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Ollama API error");
            return Err(classify_status(status, &request.model, &error_text));
        }

        let body = response.text().await.map_err(|e| self.map_send_error(e))?;
        let raw: types::ChatResponseRaw = serde_json::from_str(&body)
            .map_err(|e| OllamaError::Malformed(format!("invalid chat body: {}", e)))?;

        let content = raw
            .message
            .map(|m| m.content)
            .ok_or_else(|| OllamaError::Malformed("response has no message".into()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            eval_count = ?raw.eval_count,
            "Ollama chat completion"
        );

        Ok(ChatResponse {
            content,
            model: if raw.model.is_empty() {
                request.model
            } else {
                raw.model
            },
            eval_count: raw.eval_count,
        })
    }

    /// Single-turn prompt, returning only the reply text.
    pub async fn generate(&self, model: &str, prompt: &str) -> Result<String> {
        let request = ChatRequest::new(model).message(Message::user(prompt));
        Ok(self.chat(request).await?.content)
    }

    /// List installed models (`GET /api/tags`).
    pub async fn list_models(&self) -> Result<Vec<ModelTag>> {
        let mut builder = self.http_client.get(format!("{}/api/tags", self.base_url));
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(OllamaError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let tags: types::TagsResponse = response
            .json()
            .await
            .map_err(|e| OllamaError::Malformed(e.to_string()))?;

        Ok(tags.models)
    }

    fn map_send_error(&self, e: reqwest::Error) -> OllamaError {
        if e.is_timeout() {
            OllamaError::Timeout(self.timeout.map(|t| t.as_secs()).unwrap_or_default())
        } else if e.is_connect() {
            OllamaError::Unreachable(format!("{}: {}", self.base_url, e))
        } else if e.is_builder() {
            OllamaError::Config(e.to_string())
        } else if e.is_decode() {
            OllamaError::Malformed(e.to_string())
        } else {
            OllamaError::Unreachable(e.to_string())
        }
    }
}

/// Map a non-2xx reply to an error, recognising Ollama's "model not found".
fn classify_status(status: StatusCode, model: &str, body: &str) -> OllamaError {
    let message = serde_json::from_str::<types::ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.to_string());

    if status == StatusCode::NOT_FOUND || message.contains("not found") {
        return OllamaError::ModelNotFound(model.to_string());
    }

    OllamaError::Api {
        status: status.as_u16(),
        message,
    }
}
