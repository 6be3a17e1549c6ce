// Main entry point for the spotlight web UI and CLI

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use spotlight_core::domains::batch::{EntryInput, Pipeline};
use spotlight_core::domains::posts::parse_document;
use spotlight_core::kernel::{OllamaGenerator, ServerDeps};
use spotlight_core::{server::build_app, Config};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "spotlight")]
#[command(about = "Generate social media spotlight posts from company homepages")]
struct Cli {
    /// Model identifier (overrides SPOTLIGHT_MODEL)
    #[arg(long, global = true)]
    model: Option<String>,

    /// Inference service base URL (overrides SPOTLIGHT_OLLAMA_URL)
    #[arg(long, global = true)]
    ollama_url: Option<String>,

    /// Output directory (overrides SPOTLIGHT_OUTPUT_DIR)
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    /// Log file (overrides SPOTLIGHT_LOG_FILE)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web form
    Serve {
        /// Listen address (overrides SPOTLIGHT_BIND)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Run one batch and print the per-company report
    Run {
        /// Company entry as "Name=URL" (repeatable)
        #[arg(long = "entry", value_name = "NAME=URL")]
        entries: Vec<String>,

        /// JSON file with entries
        #[arg(long, conflicts_with = "entries")]
        input: Option<PathBuf>,
    },

    /// Print the sections of a generated post file
    Show { file: PathBuf },
}

/// `--input` accepts a bare list or the same body as `POST /api/batch`.
#[derive(Deserialize)]
#[serde(untagged)]
enum InputFile {
    List(Vec<EntryInput>),
    Batch { entries: Vec<EntryInput> },
}

impl InputFile {
    fn into_entries(self) -> Vec<EntryInput> {
        match self {
            InputFile::List(entries) | InputFile::Batch { entries } => entries,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(url) = cli.ollama_url {
        config.ollama_url = url;
    }
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    if let Some(file) = cli.log_file {
        config.log_file = file;
    }

    init_tracing(&config)?;
    tracing::info!(model = %config.model, ollama_url = %config.ollama_url, "Configuration loaded");

    match cli.command {
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                config.bind_addr = bind;
            }
            serve(config).await
        }
        Commands::Run { entries, input } => {
            let entries = match input {
                Some(path) => read_input(&path)?,
                None => parse_entries(&entries)?,
            };
            run(config, entries).await
        }
        Commands::Show { file } => show(&file),
    }
}

/// Stdout plus an append-only log file, both filtered by `RUST_LOG`.
fn init_tracing(config: &Config) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,spotlight_core=debug".into()),
        )
        .with(fmt::layer())
        .with(
            fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}

/// Warn early when the model is missing; companies still fail individually.
async fn preflight(config: &Config) {
    let generator = OllamaGenerator::for_preflight(config);
    match generator.model_installed().await {
        Ok(true) => tracing::info!(model = %config.model, "Model available"),
        Ok(false) => tracing::warn!(
            model = %config.model,
            "Model is not installed; pull it before generating posts"
        ),
        Err(e) => tracing::warn!(
            ollama_url = %config.ollama_url,
            error = %e,
            "Could not reach inference service"
        ),
    }
}

fn build_pipeline(config: &Config) -> Result<Pipeline> {
    let deps = ServerDeps::from_config(config).context("Failed to build dependencies")?;
    Ok(Pipeline::new(deps, config))
}

async fn serve(config: Config) -> Result<()> {
    let app = build_app(build_pipeline(&config)?);
    preflight(&config).await;

    tracing::info!("Starting server on {}", config.bind_addr);
    tracing::info!("Entry form: http://{}/", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

async fn run(config: Config, entries: Vec<EntryInput>) -> Result<()> {
    let pipeline = build_pipeline(&config)?;
    preflight(&config).await;
    let report = pipeline.run_batch(entries).await;

    println!("{}", report.summary());
    Ok(())
}

fn show(path: &Path) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let parsed = parse_document(&text);

    if let Some(company) = &parsed.company {
        println!("Company: {company}");
    }
    if let Some(website) = &parsed.website {
        println!("Website: {website}");
    }
    for section in &parsed.sections {
        println!("\n[{}]\n{}", section.platform, section.body);
    }

    parsed
        .into_document()
        .with_context(|| format!("{} is not a complete post file", path.display()))?;
    Ok(())
}

fn read_input(path: &Path) -> Result<Vec<EntryInput>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let input: InputFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(input.into_entries())
}

fn parse_entries(raw: &[String]) -> Result<Vec<EntryInput>> {
    raw.iter()
        .map(|pair| {
            EntryInput::parse_pair(pair)
                .with_context(|| format!("Expected NAME=URL, got {pair:?}"))
        })
        .collect()
}
