//! User-supplied (company name, URL) pairs and their validation.

use extraction::parse_http_url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domains::posts::safe_company_name;

/// Most entries processed per batch.
pub const MAX_BATCH_ENTRIES: usize = 12;

/// A pair exactly as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl EntryInput {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Both fields empty: an unused form row, not an entry.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.url.trim().is_empty()
    }

    /// Parse `Name=URL` (CLI form), splitting at the first `=`.
    pub fn parse_pair(raw: &str) -> Option<Self> {
        let (name, url) = raw.split_once('=')?;
        Some(Self::new(name.trim(), url.trim()))
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("company name is empty")]
    EmptyName,

    #[error("company name {0:?} has no usable characters for a file name")]
    UnusableName(String),

    #[error("website URL is empty")]
    EmptyUrl,

    #[error("website URL is not valid: {0}")]
    InvalidUrl(String),

    #[error("batch limit of {0} entries exceeded")]
    BatchLimitExceeded(usize),
}

/// A validated entry, ready for processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyEntry {
    pub name: String,
    pub url: String,
}

impl CompanyEntry {
    /// Trim and check both fields.
    pub fn validate(input: &EntryInput) -> Result<Self, ValidationError> {
        let name = input.name.trim();
        let url = input.url.trim();

        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if safe_company_name(name).is_empty() {
            return Err(ValidationError::UnusableName(name.to_string()));
        }
        if url.is_empty() {
            return Err(ValidationError::EmptyUrl);
        }
        parse_http_url(url).map_err(|e| ValidationError::InvalidUrl(e.to_string()))?;

        Ok(Self {
            name: name.to_string(),
            url: url.to_string(),
        })
    }
}
