//! Runs the four generation calls for a company and assembles the document.

use tracing::{debug, info, warn};

use super::errors::{AssembleError, GenerationError};
use super::models::document::{CompanyDocument, PlatformPost};
use super::models::platform::Platform;
use super::prompts::PromptBuilder;
use crate::domains::batch::CompanyState;
use crate::kernel::BaseGenerator;

/// Generate one post per platform, strictly one after another, in
/// [`Platform::ALL`] order. Stops at the first failure.
pub async fn assemble_document(
    generator: &dyn BaseGenerator,
    prompts: &PromptBuilder,
    company: &str,
    website: &str,
    homepage_text: &str,
) -> Result<CompanyDocument, AssembleError> {
    let mut posts = Vec::with_capacity(Platform::ALL.len());

    for platform in Platform::ALL {
        debug!(company = %company, state = %CompanyState::Generating(platform.step()), "State transition");
        info!(company = %company, platform = %platform, model = %generator.model(), "Generating post");

        let prompt = prompts.build(platform, company, homepage_text);
        let body = generator.generate(&prompt).await.map_err(|cause| {
            warn!(company = %company, platform = %platform, error = %cause, "Generation failed");
            GenerationError {
                company: company.to_string(),
                platform,
                cause,
            }
        })?;

        posts.push(PlatformPost::new(platform, body.trim()));
    }

    debug!(company = %company, state = %CompanyState::Assembling, "State transition");
    Ok(CompanyDocument::new(company, website, posts)?)
}
