//! Posts domain - prompt building, generation and output files
//!
//! # Components
//!
//! - `models/` - Platform, PlatformPost, CompanyDocument
//! - `prompts` - brand guide and per-platform prompts
//! - `assembler` - the four sequential generation calls
//! - `writer` - `{Name}_{YYYYMMDD}.txt` output

pub mod assembler;
pub mod errors;
pub mod models;
pub mod prompts;
pub mod writer;

pub use assembler::assemble_document;
pub use errors::{AssembleError, GenerationError, WriteError};
pub use models::{parse_document, CompanyDocument, DocumentError, ParsedDocument, Platform, PlatformPost};
pub use prompts::PromptBuilder;
pub use writer::{output_file_name, safe_company_name, PostWriter};
