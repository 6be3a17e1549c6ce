// Spotlight - API Core
//
// Turns company homepages into four social media posts each, using a local
// language model. The pipeline lives in domains/batch; the web form and CLI
// in server/.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
