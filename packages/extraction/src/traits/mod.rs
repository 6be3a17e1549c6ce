//! Core trait abstractions.

pub mod fetcher;

pub use fetcher::{parse_http_url, PageFetcher};
