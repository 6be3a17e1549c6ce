//! Visible-text extraction from homepage HTML.
//!
//! Only headings (`h1`–`h6`) and paragraphs (`p`) are read. The parser is
//! the tolerant HTML5 tree builder from `scraper`, so malformed markup
//! yields partial text plus warnings, never an error.

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::debug;

const TEXT_TAGS: [&str; 7] = ["h1", "h2", "h3", "h4", "h5", "h6", "p"];

/// Text pulled from a homepage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedContent {
    /// URL the HTML came from
    pub source_url: String,

    /// Element texts joined with newlines (may be empty)
    pub text: String,

    /// Parse problems that were skipped over
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl ExtractedContent {
    /// True when no heading or paragraph carried any text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// The first `max_chars` characters of the text.
    pub fn excerpt(&self, max_chars: usize) -> &str {
        truncate_chars(&self.text, max_chars)
    }
}

/// Extract heading and paragraph text from `html` in document order.
///
/// Whitespace inside an element is collapsed to single spaces; elements
/// with no text are dropped; the rest are joined with `\n`.
/// An element nested inside another heading or paragraph is covered by
/// its ancestor and not emitted twice.
pub fn extract_visible_text(source_url: &str, html: &str) -> ExtractedContent {
    let document = Html::parse_document(html);
    let warnings: Vec<String> = document.errors.iter().map(|e| e.to_string()).collect();

    let mut blocks = Vec::new();
    if let Ok(selector) = Selector::parse(&TEXT_TAGS.join(", ")) {
        for element in document.select(&selector) {
            if has_text_ancestor(&element) {
                continue;
            }
            let text = element_text(&element);
            if !text.is_empty() {
                blocks.push(text);
            }
        }
    }

    debug!(
        url = %source_url,
        blocks = blocks.len(),
        warnings = warnings.len(),
        "Extracted visible text"
    );

    ExtractedContent {
        source_url: source_url.to_string(),
        text: blocks.join("\n"),
        warnings,
    }
}

/// Cut `text` to at most `max_chars` characters at a raw character boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

fn element_text(element: &ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn has_text_ancestor(element: &ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| TEXT_TAGS.contains(&ancestor.value().name()))
}
