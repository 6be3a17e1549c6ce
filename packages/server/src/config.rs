use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Model used when `SPOTLIGHT_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "llama3.1:latest";

/// Pipeline configuration, loaded once at startup and passed in explicitly
#[derive(Debug, Clone)]
pub struct Config {
    /// Model identifier sent to the inference service
    pub model: String,
    /// Base URL of the local Ollama service
    pub ollama_url: String,
    /// Homepage text is cut to this many characters before prompting
    pub max_excerpt_chars: usize,
    pub fetch_timeout: Duration,
    pub generation_timeout: Duration,
    /// Directory generated post files are written to (created on demand)
    pub output_dir: PathBuf,
    /// Append-only log file
    pub log_file: PathBuf,
    /// Web UI listen address
    pub bind_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            ollama_url: ollama_client::DEFAULT_BASE_URL.to_string(),
            max_excerpt_chars: 1500,
            fetch_timeout: Duration::from_secs(10),
            generation_timeout: Duration::from_secs(300),
            output_dir: PathBuf::from("output"),
            log_file: PathBuf::from("spotlight.log"),
            bind_addr: "127.0.0.1:7860".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = Self::default();

        Ok(Self {
            model: env::var("SPOTLIGHT_MODEL").unwrap_or(defaults.model),
            ollama_url: env::var("SPOTLIGHT_OLLAMA_URL").unwrap_or(defaults.ollama_url),
            max_excerpt_chars: match env::var("SPOTLIGHT_MAX_EXCERPT_CHARS") {
                Ok(v) => v
                    .parse()
                    .context("SPOTLIGHT_MAX_EXCERPT_CHARS must be a whole number")?,
                Err(_) => defaults.max_excerpt_chars,
            },
            fetch_timeout: secs_var("SPOTLIGHT_FETCH_TIMEOUT_SECS", defaults.fetch_timeout)?,
            generation_timeout: secs_var(
                "SPOTLIGHT_GENERATION_TIMEOUT_SECS",
                defaults.generation_timeout,
            )?,
            output_dir: env::var("SPOTLIGHT_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            log_file: env::var("SPOTLIGHT_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file),
            bind_addr: env::var("SPOTLIGHT_BIND").unwrap_or(defaults.bind_addr),
        })
    }
}

fn secs_var(name: &str, default: Duration) -> Result<Duration> {
    match env::var(name) {
        Ok(v) => {
            let secs: u64 = v
                .parse()
                .with_context(|| format!("{name} must be a number of seconds"))?;
            Ok(Duration::from_secs(secs))
        }
        Err(_) => Ok(default),
    }
}
