//! Mock fetcher for testing.
//!
//! Provides a configurable mock implementation of the PageFetcher trait.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{FetchError, FetchErrorKind, FetchResult};
use crate::traits::fetcher::PageFetcher;
use crate::types::page::FetchedPage;

#[derive(Debug, Clone)]
enum CannedResponse {
    Page(FetchedPage),
    Failure(FetchErrorKind),
}

/// Mock fetcher for testing.
///
/// URLs without a canned response fail with a connection error, the same
/// as an unreachable host.
///
/// # Example
///
/// ```rust
/// use extraction::fetchers::{MockFetcher, PageFetcher};
///
/// let mock = MockFetcher::new().with_html("https://example.com", "<h1>Hello</h1>");
///
/// let page = tokio_test::block_on(mock.fetch("https://example.com")).unwrap();
/// assert_eq!(page.html, "<h1>Hello</h1>");
/// assert!(tokio_test::block_on(mock.fetch("https://other.test")).is_err());
/// assert_eq!(mock.fetch_call_count(), 2);
/// ```
#[derive(Default, Clone)]
pub struct MockFetcher {
    responses: Arc<RwLock<HashMap<String, CannedResponse>>>,
    fetch_calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    /// Create a new empty mock fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for `url` (builder pattern).
    pub fn with_html(self, url: impl Into<String>, html: impl Into<String>) -> Self {
        let url = url.into();
        let page = FetchedPage::new(url.clone(), html);
        self.responses
            .write()
            .unwrap()
            .insert(url, CannedResponse::Page(page));
        self
    }

    /// Fail requests for `url` with `kind` (builder pattern).
    pub fn with_failure(self, url: impl Into<String>, kind: FetchErrorKind) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(url.into(), CannedResponse::Failure(kind));
        self
    }

    /// Get the number of times fetch was called.
    pub fn fetch_call_count(&self) -> usize {
        self.fetch_calls.read().unwrap().len()
    }

    /// Get the URLs that were requested, in order.
    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.read().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage> {
        self.fetch_calls.write().unwrap().push(url.to_string());

        match self.responses.read().unwrap().get(url) {
            Some(CannedResponse::Page(page)) => Ok(page.clone()),
            Some(CannedResponse::Failure(kind)) => Err(FetchError::new(url, kind.clone())),
            None => Err(FetchError::new(
                url,
                FetchErrorKind::Connect("connection refused".into()),
            )),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_serves_canned_page() {
        let mock = MockFetcher::new().with_html("https://example.com", "<p>Hi</p>");

        let page = mock.fetch("https://example.com").await.unwrap();
        assert_eq!(page.html, "<p>Hi</p>");
        assert_eq!(page.status, 200);
        assert_eq!(mock.fetch_calls(), vec!["https://example.com".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_unknown_url_is_unreachable() {
        let mock = MockFetcher::new();

        let err = mock.fetch("https://down.example").await.unwrap_err();
        assert!(matches!(err.kind, FetchErrorKind::Connect(_)));
        assert_eq!(mock.fetch_call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_configured_failure() {
        let mock = MockFetcher::new().with_failure("https://slow.example", FetchErrorKind::Timeout);

        let err = mock.fetch("https://slow.example").await.unwrap_err();
        assert_eq!(err.kind, FetchErrorKind::Timeout);
    }
}
