//! Kernel module - infrastructure and dependencies.

pub mod deps;
pub mod ollama;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use ollama::OllamaGenerator;
pub use test_dependencies::{MockGenerator, TestDependencies};
pub use traits::*;

// Re-export from extraction library for easy access
pub use extraction::{HttpFetcher, MockFetcher, PageFetcher};
