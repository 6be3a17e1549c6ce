//! Typed errors for the extraction library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// A page could not be fetched.
#[derive(Debug, Error)]
#[error("failed to fetch {url}: {kind}")]
pub struct FetchError {
    /// URL that was requested
    pub url: String,

    /// What went wrong
    pub kind: FetchErrorKind,
}

impl FetchError {
    pub fn new(url: impl Into<String>, kind: FetchErrorKind) -> Self {
        Self {
            url: url.into(),
            kind,
        }
    }
}

/// Underlying cause of a [`FetchError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchErrorKind {
    /// URL did not parse or is not http(s)
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// No response within the configured timeout
    #[error("timed out")]
    Timeout,

    /// Connection refused, DNS failure, TLS failure
    #[error("connection failed: {0}")]
    Connect(String),

    /// Server answered with a non-2xx status
    #[error("HTTP {0}")]
    Status(u16),

    /// Body could not be read
    #[error("failed to read body: {0}")]
    Body(String),

    /// Any other request failure
    #[error("request failed: {0}")]
    Request(String),
}

/// The HTTP client backing a fetcher could not be built.
#[derive(Debug, Error)]
#[error("failed to build HTTP client: {0}")]
pub struct ClientError(#[from] pub reqwest::Error);

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
