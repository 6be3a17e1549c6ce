//! Server dependencies for the pipeline (using traits for testability)
//!
//! All external services use trait abstractions to enable testing.

use anyhow::{Context, Result};
use std::sync::Arc;

use extraction::{HttpFetcher, PageFetcher};

use crate::config::Config;
use crate::kernel::{BaseGenerator, OllamaGenerator};

/// External services the pipeline talks to
#[derive(Clone)]
pub struct ServerDeps {
    /// Homepage fetcher
    pub fetcher: Arc<dyn PageFetcher>,
    /// Text generation (local inference service)
    pub generator: Arc<dyn BaseGenerator>,
}

impl ServerDeps {
    pub fn new(fetcher: Arc<dyn PageFetcher>, generator: Arc<dyn BaseGenerator>) -> Self {
        Self { fetcher, generator }
    }

    /// Real HTTP fetcher and Ollama generator built from config
    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher =
            HttpFetcher::new(config.fetch_timeout).context("Failed to create HTTP fetcher")?;
        let generator = OllamaGenerator::from_config(config);

        Ok(Self::new(Arc::new(fetcher), Arc::new(generator)))
    }
}
