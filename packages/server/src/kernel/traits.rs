// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// What to prompt for lives in domains/posts.
//
// Naming convention: Base* for trait names (e.g., BaseGenerator)

use async_trait::async_trait;

// =============================================================================
// Generator Trait (Infrastructure - text generation)
// =============================================================================

#[async_trait]
pub trait BaseGenerator: Send + Sync {
    /// Send a prompt and wait for the complete reply
    async fn generate(&self, prompt: &str) -> ollama_client::Result<String>;

    /// Model identifier used for generation
    fn model(&self) -> &str;
}
