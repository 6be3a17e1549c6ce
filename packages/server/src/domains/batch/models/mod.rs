pub mod entry;
pub mod outcome;
pub mod state;

pub use entry::{CompanyEntry, EntryInput, ValidationError, MAX_BATCH_ENTRIES};
pub use outcome::{BatchReport, CompanyOutcome, OutcomeStatus};
pub use state::CompanyState;
