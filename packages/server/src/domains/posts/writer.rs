//! Persists company documents as dated text files.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use super::errors::WriteError;
use super::models::document::CompanyDocument;

/// Keep alphanumerics, spaces, `-` and `_`, then trim.
pub fn safe_company_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// `{SafeName}_{YYYYMMDD}.txt`
pub fn output_file_name(company: &str, date: NaiveDate) -> String {
    format!("{}_{}.txt", safe_company_name(company), date.format("%Y%m%d"))
}

/// Writes documents into one output directory.
#[derive(Debug, Clone)]
pub struct PostWriter {
    output_dir: PathBuf,
}

impl PostWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Where the document for `company` on `date` is written.
    pub fn path_for(&self, company: &str, date: NaiveDate) -> PathBuf {
        self.output_dir.join(output_file_name(company, date))
    }

    /// Create the output directory if needed and write the document,
    /// replacing any file already there for the same company and day.
    pub async fn write(
        &self,
        document: &CompanyDocument,
        date: NaiveDate,
    ) -> Result<PathBuf, WriteError> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|source| WriteError {
                path: self.output_dir.clone(),
                source,
            })?;

        let path = self.path_for(document.company(), date);
        if let Err(source) = tokio::fs::write(&path, document.render()).await {
            error!(path = %path.display(), error = %source, "Failed to write posts");
            return Err(WriteError { path, source });
        }

        info!(company = %document.company(), path = %path.display(), "Posts saved");
        Ok(path)
    }
}
