//! What happened to each company in a batch.

use serde::Serialize;
use std::path::PathBuf;

use super::state::CompanyState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeStatus {
    Done {
        path: PathBuf,
    },
    Skipped {
        /// State the company was in when it was abandoned
        stage: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyOutcome {
    pub company: String,
    pub url: String,
    #[serde(flatten)]
    pub status: OutcomeStatus,
}

impl CompanyOutcome {
    pub fn done(company: impl Into<String>, url: impl Into<String>, path: PathBuf) -> Self {
        Self {
            company: company.into(),
            url: url.into(),
            status: OutcomeStatus::Done { path },
        }
    }

    pub fn skipped(
        company: impl Into<String>,
        url: impl Into<String>,
        stage: &CompanyState,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            url: url.into(),
            status: OutcomeStatus::Skipped {
                stage: stage.to_string(),
                reason: reason.into(),
            },
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self.status, OutcomeStatus::Done { .. })
    }

    /// One line for the user.
    pub fn message(&self) -> String {
        let company = if self.company.is_empty() {
            "(unnamed entry)"
        } else {
            self.company.as_str()
        };
        match &self.status {
            OutcomeStatus::Done { path } => format!(
                "Successfully processed {}. Posts saved to {}",
                company,
                path.display()
            ),
            OutcomeStatus::Skipped { reason, .. } => format!("Skipped {}: {}", company, reason),
        }
    }
}

/// Result of one batch, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<CompanyOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_done()).count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Per-company lines, or a notice when nothing was submitted.
    pub fn summary(&self) -> String {
        if self.outcomes.is_empty() {
            return "No valid company/website entries provided.".to_string();
        }
        self.outcomes
            .iter()
            .map(CompanyOutcome::message)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_summary() {
        assert_eq!(
            BatchReport::default().summary(),
            "No valid company/website entries provided."
        );
    }

    #[test]
    fn test_counts_and_messages() {
        let report = BatchReport {
            outcomes: vec![
                CompanyOutcome::done("Acme", "https://a.test", PathBuf::from("output/Acme_20261014.txt")),
                CompanyOutcome::skipped("Beta", "https://b.test", &CompanyState::Fetching, "fetch failed: HTTP 500"),
            ],
        };

        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.skipped(), 1);
        assert_eq!(
            report.summary(),
            "Successfully processed Acme. Posts saved to output/Acme_20261014.txt\n\
             Skipped Beta: fetch failed: HTTP 500"
        );
    }

    #[test]
    fn test_json_shape() {
        let outcome = CompanyOutcome::skipped("Beta", "https://b.test", &CompanyState::Fetching, "down");
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["status"], "skipped");
        assert_eq!(json["stage"], "fetching");
        assert_eq!(json["reason"], "down");
        assert_eq!(json["company"], "Beta");
    }
}
