use extraction::FetchError;
use thiserror::Error;

use super::models::{CompanyState, ValidationError};
use crate::domains::posts::{AssembleError, DocumentError, GenerationError, WriteError};

/// Anything that turns a company into a skipped outcome.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid entry: {0}")]
    Validation(#[from] ValidationError),

    #[error("fetch failed: {}", .0.kind)]
    Fetch(#[from] FetchError),

    #[error("no visible text extracted from {url}")]
    EmptyPage { url: String },

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("invalid document: {0}")]
    Document(#[from] DocumentError),

    #[error("write failed: {0}")]
    Write(#[from] WriteError),
}

impl From<AssembleError> for PipelineError {
    fn from(err: AssembleError) -> Self {
        match err {
            AssembleError::Generation(e) => PipelineError::Generation(e),
            AssembleError::Document(e) => PipelineError::Document(e),
        }
    }
}

impl PipelineError {
    /// State the company was in when this error ended it.
    pub fn stage(&self) -> CompanyState {
        match self {
            PipelineError::Validation(_) => CompanyState::Pending,
            PipelineError::Fetch(_) => CompanyState::Fetching,
            PipelineError::EmptyPage { .. } => CompanyState::Extracting,
            PipelineError::Generation(e) => CompanyState::Generating(e.platform.step()),
            PipelineError::Document(_) => CompanyState::Assembling,
            PipelineError::Write(_) => CompanyState::Writing,
        }
    }
}
