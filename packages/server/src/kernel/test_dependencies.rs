// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use async_trait::async_trait;
use ollama_client::OllamaError;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{BaseGenerator, ServerDeps};
use extraction::MockFetcher;

// =============================================================================
// Mock Generator
// =============================================================================

#[derive(Debug, Clone)]
enum Scripted {
    Reply(String),
    Fail(fn() -> OllamaError),
}

/// Generator that replays scripted replies and records every prompt.
///
/// Once the script is exhausted it answers with a reply derived from the
/// prompt, so the same prompt always yields the same text.
#[derive(Clone, Default)]
pub struct MockGenerator {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    delay: Option<Duration>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply
    pub fn with_reply(self, reply: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Reply(reply.to_string()));
        self
    }

    /// Queue a failure
    pub fn with_failure(self, error: fn() -> OllamaError) -> Self {
        self.script.lock().unwrap().push_back(Scripted::Fail(error));
        self
    }

    /// Sleep this long before answering each call
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Prompts received, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> ollama_client::Result<String> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.prompts.lock().unwrap().push(prompt.to_string());

        match self.script.lock().unwrap().pop_front() {
            Some(Scripted::Reply(reply)) => Ok(reply),
            Some(Scripted::Fail(error)) => Err(error()),
            None => {
                let task = prompt
                    .lines()
                    .find(|line| line.starts_with("Task:"))
                    .unwrap_or("Task: post");
                Ok(format!("Generated post for {}", task.trim_start_matches("Task: ")))
            }
        }
    }

    fn model(&self) -> &str {
        "mock-model"
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Mock fetcher + mock generator, with handles kept for assertions
pub struct TestDependencies {
    pub fetcher: MockFetcher,
    pub generator: MockGenerator,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            fetcher: MockFetcher::new(),
            generator: MockGenerator::new(),
        }
    }

    pub fn with_fetcher(mut self, fetcher: MockFetcher) -> Self {
        self.fetcher = fetcher;
        self
    }

    pub fn with_generator(mut self, generator: MockGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Build ServerDeps sharing state with the handles kept here
    pub fn into_server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            Arc::new(self.fetcher.clone()),
            Arc::new(self.generator.clone()),
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
