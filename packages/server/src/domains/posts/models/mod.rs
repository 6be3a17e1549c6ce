pub mod document;
pub mod platform;

pub use document::{parse_document, CompanyDocument, DocumentError, ParsedDocument, PlatformPost};
pub use platform::Platform;
