//! Fetcher trait for retrieving a single homepage.
//!
//! The pipeline only ever needs one page per company, so unlike a crawler
//! there is no discovery, queueing or link following here: one URL in,
//! one page (or one error) out.

use async_trait::async_trait;
use url::Url;

use crate::error::{FetchErrorKind, FetchResult};
use crate::types::page::FetchedPage;

/// Fetches raw HTML for a URL.
///
/// Implementations make a single attempt. Retrying is the caller's
/// decision, and the pipeline does not retry.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page at `url`.
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage>;

    /// Name of this fetcher, for logs.
    fn name(&self) -> &str;
}

/// Parse `raw` as an absolute `http`/`https` URL with a host.
pub fn parse_http_url(raw: &str) -> Result<Url, FetchErrorKind> {
    let url = Url::parse(raw.trim()).map_err(|e| FetchErrorKind::InvalidUrl(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(FetchErrorKind::InvalidUrl(format!(
                "unsupported scheme: {other}"
            )))
        }
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(FetchErrorKind::InvalidUrl("URL has no host".into()));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(parse_http_url("https://example.com").is_ok());
        assert!(parse_http_url("http://example.com/about?x=1").is_ok());
        assert!(parse_http_url("  https://example.com  ").is_ok());
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(matches!(
            parse_http_url("ftp://example.com"),
            Err(FetchErrorKind::InvalidUrl(_))
        ));
        assert!(matches!(
            parse_http_url("file:///etc/passwd"),
            Err(FetchErrorKind::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_rejects_relative_and_garbage() {
        assert!(parse_http_url("example.com").is_err());
        assert!(parse_http_url("not a url").is_err());
        assert!(parse_http_url("").is_err());
    }
}
