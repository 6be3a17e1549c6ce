//! Data types produced by fetching and extraction.

pub mod page;
