//! Fetched page type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw HTML returned by a successful fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedPage {
    /// URL that was requested
    pub url: String,

    /// URL after redirects
    pub final_url: String,

    /// HTTP status code (always 2xx)
    pub status: u16,

    /// MIME type from the Content-Type header, if any
    pub content_type: Option<String>,

    /// Response body
    pub html: String,

    /// When the response was received
    pub fetched_at: DateTime<Utc>,
}

impl FetchedPage {
    /// Create a page with a 200 status and no redirect.
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            final_url: url.clone(),
            url,
            status: 200,
            content_type: Some("text/html".to_string()),
            html: html.into(),
            fetched_at: Utc::now(),
        }
    }
}
