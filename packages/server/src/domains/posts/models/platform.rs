//! Social platforms a post is generated for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A social media target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    #[serde(rename = "linkedin")]
    LinkedIn,
    X,
    Instagram,
}

impl Platform {
    /// Generation and document order.
    pub const ALL: [Platform; 4] = [
        Platform::Facebook,
        Platform::LinkedIn,
        Platform::X,
        Platform::Instagram,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::LinkedIn => "LinkedIn",
            Platform::X => "X",
            Platform::Instagram => "Instagram",
        }
    }

    /// Section header line used in output files.
    pub fn section_header(&self) -> &'static str {
        match self {
            Platform::Facebook => "=== FACEBOOK POST ===",
            Platform::LinkedIn => "=== LINKEDIN POST ===",
            Platform::X => "=== X (TWITTER) POST ===",
            Platform::Instagram => "=== INSTAGRAM POST ===",
        }
    }

    /// Inverse of [`Platform::section_header`]. Trailing whitespace is
    /// ignored; an indented line is body text.
    pub fn from_section_header(line: &str) -> Option<Platform> {
        let line = line.trim_end();
        Self::ALL.into_iter().find(|p| p.section_header() == line)
    }

    /// 1-based position in [`Platform::ALL`].
    pub fn step(&self) -> usize {
        Self::ALL
            .iter()
            .position(|p| p == self)
            .map(|i| i + 1)
            .unwrap_or_default()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_order() {
        assert_eq!(
            Platform::ALL.map(|p| p.name()),
            ["Facebook", "LinkedIn", "X", "Instagram"]
        );
        assert_eq!(Platform::Facebook.step(), 1);
        assert_eq!(Platform::Instagram.step(), 4);
    }

    #[test]
    fn test_section_headers_roundtrip() {
        for platform in Platform::ALL {
            assert_eq!(
                Platform::from_section_header(platform.section_header()),
                Some(platform)
            );
        }
        assert_eq!(Platform::from_section_header("=== TIKTOK POST ==="), None);
        assert_eq!(
            Platform::from_section_header("=== X (TWITTER) POST ===  "),
            Some(Platform::X)
        );
        assert_eq!(Platform::from_section_header(" === X (TWITTER) POST ==="), None);
    }
}
