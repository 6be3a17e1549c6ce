//! Homepage fetching and visible-text extraction.
//!
//! Two steps, kept separate so either can be swapped in tests:
//!
//! 1. A [`PageFetcher`] retrieves raw HTML with a single bounded request.
//! 2. [`extract_visible_text`] reads heading and paragraph text out of it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use extraction::{extract_visible_text, HttpFetcher, PageFetcher};
//!
//! let fetcher = HttpFetcher::new(Duration::from_secs(10))?;
//! let page = fetcher.fetch("https://example.com").await?;
//! let content = extract_visible_text(&page.url, &page.html);
//! let excerpt = content.excerpt(1500);
//! ```

pub mod error;
pub mod fetchers;
pub mod text;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{ClientError, FetchError, FetchErrorKind, FetchResult};
pub use fetchers::{HttpFetcher, MockFetcher, DEFAULT_FETCH_TIMEOUT};
pub use text::{extract_visible_text, truncate_chars, ExtractedContent};
pub use traits::{parse_http_url, PageFetcher};
pub use types::page::FetchedPage;
