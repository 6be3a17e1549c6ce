//! HTTP-based fetcher implementation.
//!
//! One GET per call, bounded by a timeout, no retries.

use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{ClientError, FetchError, FetchErrorKind, FetchResult};
use crate::traits::fetcher::{parse_http_url, PageFetcher};
use crate::types::page::FetchedPage;

/// Timeout applied when none is given.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// HTTP fetcher that retrieves a page with a single bounded request.
///
/// # Example
///
/// ```rust,ignore
/// use extraction::fetchers::HttpFetcher;
///
/// let fetcher = HttpFetcher::new(Duration::from_secs(10))?;
/// let page = fetcher.fetch("https://example.com").await?;
/// ```
pub struct HttpFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, ClientError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            reqwest::header::HeaderValue::from_static("en-US,en;q=0.5"),
        );

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self { client, timeout })
    }

    /// The request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Classify a reqwest failure.
fn classify(e: &reqwest::Error) -> FetchErrorKind {
    if e.is_timeout() {
        FetchErrorKind::Timeout
    } else if e.is_connect() {
        FetchErrorKind::Connect(e.to_string())
    } else if e.is_body() || e.is_decode() {
        FetchErrorKind::Body(e.to_string())
    } else {
        FetchErrorKind::Request(e.to_string())
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage> {
        let parsed = parse_http_url(url).map_err(|kind| FetchError::new(url, kind))?;

        debug!(url = %url, timeout_s = self.timeout.as_secs(), "HTTP fetch starting");
        let response = self.client.get(parsed).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "HTTP request failed");
            FetchError::new(url, classify(&e))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "HTTP status not successful");
            return Err(FetchError::new(url, FetchErrorKind::Status(status.as_u16())));
        }

        // Capture final URL after redirects
        let final_url = response.url().to_string();

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let html = response
            .text()
            .await
            .map_err(|e| FetchError::new(url, classify(&e)))?;

        debug!(
            url = %url,
            final_url = %final_url,
            content_length = html.len(),
            "Page fetched successfully"
        );

        Ok(FetchedPage {
            url: url.to_string(),
            final_url,
            status: status.as_u16(),
            content_type,
            html,
            fetched_at: Utc::now(),
        })
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_keeps_timeout() {
        let fetcher = HttpFetcher::new(Duration::from_secs(3)).unwrap();
        assert_eq!(fetcher.timeout(), Duration::from_secs(3));
        assert_eq!(fetcher.name(), "http");
    }

    #[tokio::test]
    async fn test_invalid_url_fails_before_request() {
        let fetcher = HttpFetcher::new(DEFAULT_FETCH_TIMEOUT).unwrap();

        let err = fetcher.fetch("mailto:someone@example.com").await.unwrap_err();
        assert_eq!(err.url, "mailto:someone@example.com");
        assert!(matches!(err.kind, FetchErrorKind::InvalidUrl(_)));
    }
}
