//! Batch domain - validating entries and running the pipeline per company
//!
//! # Components
//!
//! - `models/` - EntryInput, CompanyEntry, CompanyState, CompanyOutcome, BatchReport
//! - `runner` - Pipeline (fetch → extract → generate → write)
//! - `errors` - PipelineError, mapped to the state a company was skipped in

pub mod errors;
pub mod models;
pub mod runner;

pub use errors::PipelineError;
pub use models::{
    BatchReport, CompanyEntry, CompanyOutcome, CompanyState, EntryInput, OutcomeStatus,
    ValidationError, MAX_BATCH_ENTRIES,
};
pub use runner::Pipeline;
