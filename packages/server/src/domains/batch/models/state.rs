//! Per-company progress through the pipeline.

use serde::Serialize;
use std::fmt;

/// `Pending → Fetching → Extracting → Generating(1..4) → Assembling → Writing → Done`,
/// with any state able to end in `Skipped`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
pub enum CompanyState {
    Pending,
    Fetching,
    Extracting,
    /// 1-based platform step
    Generating(usize),
    Assembling,
    Writing,
    Done,
    Skipped(String),
}

impl fmt::Display for CompanyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompanyState::Pending => f.write_str("pending"),
            CompanyState::Fetching => f.write_str("fetching"),
            CompanyState::Extracting => f.write_str("extracting"),
            CompanyState::Generating(step) => write!(f, "generating({step}/4)"),
            CompanyState::Assembling => f.write_str("assembling"),
            CompanyState::Writing => f.write_str("writing"),
            CompanyState::Done => f.write_str("done"),
            CompanyState::Skipped(reason) => write!(f, "skipped: {reason}"),
        }
    }
}
