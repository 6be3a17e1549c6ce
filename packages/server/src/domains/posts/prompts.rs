//! LLM prompts for post generation.
//!
//! Every prompt is the brand guide, a platform coordinator brief, the
//! company name and a homepage excerpt, followed by a platform task.

use extraction::truncate_chars;

use super::models::platform::Platform;

/// Brand guide prepended to every prompt.
pub const BRAND_GUIDE: &str = "\
TMSA Brand Guide (Summary):
- Mission: Empower marketing and sales professionals in transportation and logistics
- Tone: Professional, approachable, industry-specific, inspirational, collaborative
- Goal: Highlight TMSA member companies, build thought leadership, foster community
";

const FACEBOOK_CONTEXT: &str = "\
As the Facebook Coordinator for TMSA, you are adept at creating engaging Facebook posts that drive engagement.
You're focused on fostering a sense of community and maximizing engagement on Facebook.
Use short sentences. Each post should be between 50 to 150 words, with high perplexity and burstiness.
Write one-sentence paragraphs. Include a call to action that encourages community interaction.
Include 3 to 5 hashtags, and 1 to 5 emojis.
";

const LINKEDIN_CONTEXT: &str = "\
As the LinkedIn Coordinator for TMSA, you specialize in crafting professional posts that resonate with a business audience.
Length: 100-150 words. Use short sentences. Write with high perplexity and burstiness.
One-sentence paragraphs. Include a call to action for engagement or traffic.
Include 3 to 5 hashtags, and 1 to 5 emojis.
Ensure professional tone and alignment with TMSA branding.
";

const X_CONTEXT: &str = "\
As the X Coordinator for TMSA, you craft concise tweets that spark engagement.
35 words max, under 280 characters.
Include relevant hashtags and a call to action.
Tone: informal and conversational.
";

const INSTAGRAM_CONTEXT: &str = "\
As the Instagram Coordinator for TMSA, you focus on visual storytelling to drive engagement.
Create a visually engaging caption that aligns with TMSA's brand identity.
Include a compelling CTA and maintain a brand-consistent style.
Consider typical Instagram dimensions and best practices.
";

/// Coordinator brief for a platform.
pub fn coordinator_context(platform: Platform) -> &'static str {
    match platform {
        Platform::Facebook => FACEBOOK_CONTEXT,
        Platform::LinkedIn => LINKEDIN_CONTEXT,
        Platform::X => X_CONTEXT,
        Platform::Instagram => INSTAGRAM_CONTEXT,
    }
}

/// Task paragraph for a platform.
pub fn task(platform: Platform, company: &str) -> String {
    match platform {
        Platform::Facebook => format!(
            "Write an engaging Facebook post (50-150 words) featuring {company}, a member of TMSA.\n\
             Make sure it aligns with TMSA's branding guidelines and fosters a sense of community on Facebook."
        ),
        Platform::LinkedIn => format!(
            "Write a professional LinkedIn post (100-150 words) featuring {company}, a member of TMSA.\n\
             Adhere to TMSA's brand guidelines, using SEO keywords and a call to action."
        ),
        Platform::X => format!(
            "Write a short, impactful tweet (max 35 words) featuring {company}, a TMSA member.\n\
             Include at least one relevant hashtag, a call to action, and ensure it fits X's character limits."
        ),
        Platform::Instagram => format!(
            "Write an Instagram caption that highlights {company}, a TMSA member.\n\
             Use a visually descriptive, upbeat tone, and end with a CTA for followers to engage."
        ),
    }
}

/// Builds the per-platform prompt for a company.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    brand_guide: String,
    max_excerpt_chars: usize,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(1500)
    }
}

impl PromptBuilder {
    pub fn new(max_excerpt_chars: usize) -> Self {
        Self {
            brand_guide: BRAND_GUIDE.to_string(),
            max_excerpt_chars,
        }
    }

    /// Replace the brand guide.
    pub fn with_brand_guide(mut self, brand_guide: impl Into<String>) -> Self {
        self.brand_guide = brand_guide.into();
        self
    }

    /// The excerpt of `homepage_text` that goes into prompts.
    pub fn excerpt<'a>(&self, homepage_text: &'a str) -> &'a str {
        truncate_chars(homepage_text, self.max_excerpt_chars)
    }

    /// Full prompt for `platform`. Pure: same inputs, same prompt.
    pub fn build(&self, platform: Platform, company: &str, homepage_text: &str) -> String {
        format!(
            "{brand}\n{context}\nCompany: {company}\nHomepage snippet: {excerpt}\n\nTask: {task}\n",
            brand = self.brand_guide,
            context = coordinator_context(platform),
            excerpt = self.excerpt(homepage_text),
            task = task(platform, company),
        )
    }
}
