//! Fetcher implementations.
//!
//! - `HttpFetcher` - single bounded GET via reqwest
//! - `MockFetcher` - canned responses for tests

mod http;
mod mock;

pub use http::{HttpFetcher, DEFAULT_FETCH_TIMEOUT};
pub use mock::MockFetcher;

// Re-export from traits for convenience
pub use crate::traits::fetcher::{parse_http_url, PageFetcher};
