// Generator implementation backed by a local Ollama service
//
// This is the infrastructure implementation of BaseGenerator.

use async_trait::async_trait;
use ollama_client::OllamaClient;

use super::BaseGenerator;
use crate::config::Config;

/// Non-streaming generation against one configured model
#[derive(Clone)]
pub struct OllamaGenerator {
    client: OllamaClient,
    model: String,
}

impl OllamaGenerator {
    pub fn new(client: OllamaClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Build from config: base URL, model and generation timeout
    pub fn from_config(config: &Config) -> Self {
        let client =
            OllamaClient::new(config.ollama_url.clone()).with_timeout(config.generation_timeout);
        Self::new(client, config.model.clone())
    }

    /// Client for the startup model check, bounded by the fetch timeout
    pub fn for_preflight(config: &Config) -> Self {
        let client =
            OllamaClient::new(config.ollama_url.clone()).with_timeout(config.fetch_timeout);
        Self::new(client, config.model.clone())
    }

    /// Whether the configured model is installed on the service.
    pub async fn model_installed(&self) -> ollama_client::Result<bool> {
        let models = self.client.list_models().await?;
        Ok(models.iter().any(|m| m.name == self.model))
    }
}

#[async_trait]
impl BaseGenerator for OllamaGenerator {
    async fn generate(&self, prompt: &str) -> ollama_client::Result<String> {
        self.client.generate(&self.model, prompt).await
    }

    fn model(&self) -> &str {
        &self.model
    }
}
