//! Drives each company through fetch → extract → generate → write.

use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

use extraction::extract_visible_text;

use super::errors::PipelineError;
use super::models::{
    BatchReport, CompanyEntry, CompanyOutcome, CompanyState, EntryInput, ValidationError,
    MAX_BATCH_ENTRIES,
};
use crate::config::Config;
use crate::domains::posts::{assemble_document, PostWriter, PromptBuilder};
use crate::kernel::ServerDeps;

/// The whole per-company pipeline plus its collaborators.
///
/// Companies are processed one at a time in input order. A failure ends
/// that company only; the batch always runs to completion.
pub struct Pipeline {
    deps: ServerDeps,
    prompts: PromptBuilder,
    writer: PostWriter,
}

impl Pipeline {
    pub fn new(deps: ServerDeps, config: &Config) -> Self {
        Self {
            deps,
            prompts: PromptBuilder::new(config.max_excerpt_chars),
            writer: PostWriter::new(config.output_dir.clone()),
        }
    }

    /// Run a batch dated today (local time).
    pub async fn run_batch(&self, inputs: Vec<EntryInput>) -> BatchReport {
        self.run_batch_on(inputs, Local::now().date_naive()).await
    }

    /// Run a batch, naming output files with `date`.
    ///
    /// Blank rows are dropped first; of the rest, only the first
    /// [`MAX_BATCH_ENTRIES`] are processed and the others are rejected.
    pub async fn run_batch_on(&self, inputs: Vec<EntryInput>, date: NaiveDate) -> BatchReport {
        let entries: Vec<EntryInput> = inputs.into_iter().filter(|i| !i.is_blank()).collect();
        info!(entries = entries.len(), date = %date, "Batch starting");

        let mut outcomes = Vec::with_capacity(entries.len());
        for (index, input) in entries.into_iter().enumerate() {
            let outcome = if index >= MAX_BATCH_ENTRIES {
                let err = PipelineError::from(ValidationError::BatchLimitExceeded(MAX_BATCH_ENTRIES));
                warn!(company = %input.name, error = %err, "Entry rejected");
                CompanyOutcome::skipped(
                    input.name.trim(),
                    input.url.trim(),
                    &err.stage(),
                    err.to_string(),
                )
            } else {
                self.process_input(&input, date).await
            };
            outcomes.push(outcome);
        }

        let report = BatchReport { outcomes };
        info!(
            succeeded = report.succeeded(),
            skipped = report.skipped(),
            "Batch complete"
        );
        report
    }

    async fn process_input(&self, input: &EntryInput, date: NaiveDate) -> CompanyOutcome {
        let result = match CompanyEntry::validate(input) {
            Ok(entry) => self.process_company(&entry, date).await,
            Err(e) => Err(e.into()),
        };

        let (company, url) = (input.name.trim(), input.url.trim());
        match result {
            Ok(path) => {
                debug!(company = %company, state = %CompanyState::Done, "State transition");
                CompanyOutcome::done(company, url, path)
            }
            Err(err) => {
                let stage = err.stage();
                debug!(company = %company, state = %CompanyState::Skipped(err.to_string()), "State transition");
                error!(company = %company, url = %url, stage = %stage, error = %err, "Company skipped");
                CompanyOutcome::skipped(company, url, &stage, err.to_string())
            }
        }
    }

    /// Fetch, extract, generate four posts and write the file for one entry.
    pub async fn process_company(
        &self,
        entry: &CompanyEntry,
        date: NaiveDate,
    ) -> Result<PathBuf, PipelineError> {
        info!(company = %entry.name, url = %entry.url, "Processing company");

        transition(&entry.name, CompanyState::Fetching);
        let page = self.deps.fetcher.fetch(&entry.url).await?;

        transition(&entry.name, CompanyState::Extracting);
        let content = extract_visible_text(&page.url, &page.html);
        if !content.warnings.is_empty() {
            debug!(
                company = %entry.name,
                warnings = content.warnings.len(),
                "Skipped malformed HTML while extracting"
            );
        }
        if content.is_empty() {
            warn!(company = %entry.name, url = %entry.url, "No meaningful text extracted");
            return Err(PipelineError::EmptyPage {
                url: entry.url.clone(),
            });
        }

        let document = assemble_document(
            self.deps.generator.as_ref(),
            &self.prompts,
            &entry.name,
            &entry.url,
            &content.text,
        )
        .await?;

        transition(&entry.name, CompanyState::Writing);
        let path = self.writer.write(&document, date).await?;

        Ok(path)
    }
}

fn transition(company: &str, state: CompanyState) {
    debug!(company = %company, state = %state, "State transition");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::batch::OutcomeStatus;
    use crate::kernel::{MockFetcher, TestDependencies};
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Log sink shared with a thread-local subscriber
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn pipeline(fetcher: MockFetcher, output_dir: &std::path::Path) -> Pipeline {
        let deps = TestDependencies::new().with_fetcher(fetcher);
        let config = Config {
            output_dir: output_dir.to_path_buf(),
            ..Config::default()
        };
        Pipeline::new(deps.into_server_deps(), &config)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    #[tokio::test]
    async fn test_page_without_text_is_skipped_at_extraction() {
        let tmp = tempfile::tempdir().unwrap();
        let fetcher = MockFetcher::new().with_html(
            "https://empty.test/",
            "<html><body><div>menu</div></body></html>",
        );
        let pipeline = pipeline(fetcher, tmp.path());

        let report = pipeline
            .run_batch_on(vec![EntryInput::new("Empty", "https://empty.test/")], date())
            .await;

        match &report.outcomes[0].status {
            OutcomeStatus::Skipped { stage, .. } => assert_eq!(stage, "extracting"),
            other => panic!("expected skip, got {other:?}"),
        }
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_entry_never_fetches() {
        let tmp = tempfile::tempdir().unwrap();
        let fetcher = MockFetcher::new();
        let pipeline = pipeline(fetcher.clone(), tmp.path());

        let report = pipeline
            .run_batch_on(vec![EntryInput::new("Acme", "ftp://acme.test")], date())
            .await;

        assert_eq!(report.skipped(), 1);
        assert!(report.outcomes[0].message().starts_with("Skipped Acme: invalid entry"));
        assert_eq!(fetcher.fetch_call_count(), 0);
    }

    #[tokio::test]
    async fn test_blank_rows_are_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        let pipeline = pipeline(MockFetcher::new(), tmp.path());

        let report = pipeline
            .run_batch_on(vec![EntryInput::new("", ""), EntryInput::new("  ", " ")], date())
            .await;

        assert!(report.outcomes.is_empty());
        assert_eq!(report.summary(), "No valid company/website entries provided.");
    }

    #[tokio::test]
    async fn test_state_transitions_follow_pipeline_order() {
        let tmp = tempfile::tempdir().unwrap();
        let fetcher = MockFetcher::new().with_html(
            "https://acme.test/",
            "<html><body><h1>Acme</h1><p>Freight.</p></body></html>",
        );
        let pipeline = pipeline(fetcher, tmp.path());

        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let report = pipeline
            .run_batch_on(vec![EntryInput::new("Acme", "https://acme.test/")], date())
            .await;
        assert_eq!(report.succeeded(), 1);

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        let states: Vec<&str> = output
            .lines()
            .filter(|l| l.contains("State transition"))
            .filter_map(|l| l.split("state=").nth(1))
            .filter_map(|rest| rest.split_whitespace().next())
            .collect();
        assert_eq!(
            states,
            [
                "fetching",
                "extracting",
                "generating(1/4)",
                "generating(2/4)",
                "generating(3/4)",
                "generating(4/4)",
                "assembling",
                "writing",
                "done",
            ]
        );
    }
}
