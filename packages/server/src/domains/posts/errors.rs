use std::path::PathBuf;

use ollama_client::OllamaError;
use thiserror::Error;

use super::models::document::DocumentError;
use super::models::platform::Platform;

/// A generation call failed; the company's remaining platforms are not attempted.
#[derive(Debug, Error)]
#[error("generation failed for {company} ({platform}): {cause}")]
pub struct GenerationError {
    pub company: String,
    pub platform: Platform,
    #[source]
    pub cause: OllamaError,
}

#[derive(Debug, Error)]
pub enum AssembleError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("invalid document: {0}")]
    Document(#[from] DocumentError),
}

/// The output file could not be written.
#[derive(Debug, Error)]
#[error("failed to write {}: {source}", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
