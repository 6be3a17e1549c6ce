//! Error types for the Ollama client.

use thiserror::Error;

/// Result type for Ollama client operations.
pub type Result<T> = std::result::Result<T, OllamaError>;

/// Ollama client errors.
#[derive(Debug, Error)]
pub enum OllamaError {
    /// Configuration error (bad base URL, client could not be built)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The inference service could not be reached (connection refused, DNS)
    #[error("Inference service unreachable: {0}")]
    Unreachable(String),

    /// The request did not complete within the configured bound
    #[error("Inference request timed out after {0}s")]
    Timeout(u64),

    /// The requested model is not installed on the service
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// Non-2xx response from the service
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body could not be decoded into the expected shape
    #[error("Malformed response: {0}")]
    Malformed(String),
}
