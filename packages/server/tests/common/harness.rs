//! Test harness: a temporary output directory plus mock dependencies.

use std::path::{Path, PathBuf};

use spotlight_core::domains::batch::Pipeline;
use spotlight_core::kernel::TestDependencies;
use spotlight_core::Config;
use tempfile::TempDir;
use test_context::AsyncTestContext;

pub struct TestHarness {
    pub deps: TestDependencies,
    pub config: Config,
    // Removed on drop
    _output: TempDir,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::with_deps(TestDependencies::new())
    }

    async fn teardown(self) {
        // Output directory is removed when the TempDir drops
    }
}

impl TestHarness {
    /// Harness with custom mocks; output goes to a fresh temp directory.
    pub fn with_deps(deps: TestDependencies) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let output = tempfile::tempdir().expect("Failed to create output dir");
        let config = Config {
            output_dir: output.path().join("output"),
            ..Config::default()
        };

        Self {
            deps,
            config,
            _output: output,
        }
    }

    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new(self.deps.into_server_deps(), &self.config)
    }

    pub fn output_dir(&self) -> &Path {
        &self.config.output_dir
    }

    /// Files written so far, sorted by name.
    pub fn output_files(&self) -> Vec<PathBuf> {
        let Ok(dir) = std::fs::read_dir(self.output_dir()) else {
            return Vec::new();
        };
        let mut files: Vec<PathBuf> = dir.filter_map(|e| e.ok()).map(|e| e.path()).collect();
        files.sort();
        files
    }
}
