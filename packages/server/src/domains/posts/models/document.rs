//! The four-post document written for each company.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::platform::Platform;

/// Generated text for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformPost {
    pub platform: Platform,
    pub body: String,
}

impl PlatformPost {
    /// Body lines that read as a section header are indented by one space
    /// so the rendered file parses back into the same sections.
    pub fn new(platform: Platform, body: impl Into<String>) -> Self {
        Self {
            platform,
            body: escape_section_headers(body.into()),
        }
    }
}

fn escape_section_headers(body: String) -> String {
    if !body.lines().any(|l| Platform::from_section_header(l).is_some()) {
        return body;
    }
    body.lines()
        .map(|line| match Platform::from_section_header(line) {
            Some(_) => format!(" {line}"),
            None => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("expected {expected} posts, got {actual}")]
    WrongPostCount { expected: usize, actual: usize },

    #[error("post {index} is for {actual}, expected {expected}")]
    OutOfOrder {
        index: usize,
        expected: Platform,
        actual: Platform,
    },

    #[error("section {0} appears more than once")]
    DuplicateSection(Platform),

    #[error("section {0} is missing")]
    MissingSection(Platform),
}

/// Exactly one post per platform, in [`Platform::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyDocument {
    company: String,
    website: String,
    posts: Vec<PlatformPost>,
}

impl CompanyDocument {
    /// Build a document, rejecting anything but the four platforms in order.
    pub fn new(
        company: impl Into<String>,
        website: impl Into<String>,
        posts: Vec<PlatformPost>,
    ) -> Result<Self, DocumentError> {
        if posts.len() != Platform::ALL.len() {
            return Err(DocumentError::WrongPostCount {
                expected: Platform::ALL.len(),
                actual: posts.len(),
            });
        }

        for (index, (post, expected)) in posts.iter().zip(Platform::ALL).enumerate() {
            if post.platform != expected {
                return Err(DocumentError::OutOfOrder {
                    index,
                    expected,
                    actual: post.platform,
                });
            }
        }

        Ok(Self {
            company: company.into(),
            website: website.into(),
            posts,
        })
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn website(&self) -> &str {
        &self.website
    }

    pub fn posts(&self) -> &[PlatformPost] {
        &self.posts
    }

    pub fn post(&self, platform: Platform) -> Option<&PlatformPost> {
        self.posts.iter().find(|p| p.platform == platform)
    }

    /// Plain-text file contents.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Company: {}\n", self.company));
        out.push_str(&format!("Website: {}\n\n", self.website));
        for post in &self.posts {
            out.push_str(post.platform.section_header());
            out.push('\n');
            out.push_str(&post.body);
            out.push_str("\n\n");
        }
        out
    }
}

/// A post file read back from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    pub company: Option<String>,
    pub website: Option<String>,
    /// Sections in file order
    pub sections: Vec<PlatformPost>,
}

impl ParsedDocument {
    /// Reassemble into a [`CompanyDocument`], enforcing the same invariants.
    pub fn into_document(self) -> Result<CompanyDocument, DocumentError> {
        for platform in Platform::ALL {
            match self.sections.iter().filter(|s| s.platform == platform).count() {
                0 => return Err(DocumentError::MissingSection(platform)),
                1 => {}
                _ => return Err(DocumentError::DuplicateSection(platform)),
            }
        }
        CompanyDocument::new(
            self.company.unwrap_or_default(),
            self.website.unwrap_or_default(),
            self.sections,
        )
    }
}

/// Split rendered text back into its header fields and platform sections.
pub fn parse_document(text: &str) -> ParsedDocument {
    let mut company = None;
    let mut website = None;
    let mut sections: Vec<PlatformPost> = Vec::new();
    let mut current: Option<(Platform, Vec<&str>)> = None;

    for line in text.lines() {
        if let Some(platform) = Platform::from_section_header(line) {
            if let Some((p, body)) = current.take() {
                sections.push(PlatformPost::new(p, body.join("\n").trim_end()));
            }
            current = Some((platform, Vec::new()));
            continue;
        }

        match current.as_mut() {
            Some((_, body)) => body.push(line),
            None => {
                if let Some(value) = line.strip_prefix("Company: ") {
                    company = Some(value.to_string());
                } else if let Some(value) = line.strip_prefix("Website: ") {
                    website = Some(value.to_string());
                }
            }
        }
    }

    if let Some((p, body)) = current.take() {
        sections.push(PlatformPost::new(p, body.join("\n").trim_end()));
    }

    ParsedDocument {
        company,
        website,
        sections,
    }
}
