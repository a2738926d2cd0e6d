//! CLI route: run context. Walks, reads, and hands the report to a sink.

use crate::aggregate::{read_records, Report};
use crate::cli::parse::Cli;
use crate::config::{ConfigLoader, MulticatConfig};
use crate::error::MulticatError;
use crate::sink::OutputSink;
use crate::tree::Walker;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// Per-run options taken from the command line
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    pub max_depth: Option<usize>,
    pub sniff: bool,
}

impl From<&Cli> for RunRequest {
    fn from(cli: &Cli) -> Self {
        Self {
            max_depth: cli.max_depth,
            sniff: cli.sniff,
        }
    }
}

/// What a successful run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The walk found no text files; nothing was delivered
    NoFiles { root: PathBuf },
    /// A report was handed to the sink
    Delivered {
        /// Files rendered into the report
        files: usize,
        /// Files dropped because they could not be read
        skipped: usize,
    },
}

/// Runtime context for CLI execution: walk root and loaded configuration.
pub struct RunContext {
    root: PathBuf,
    config: MulticatConfig,
}

impl RunContext {
    /// Create run context from the walk root and optional config path.
    pub fn new(root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, MulticatError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&root)?
        };
        Ok(Self::with_config(root, config.validated()?))
    }

    pub fn with_config(root: PathBuf, config: MulticatConfig) -> Self {
        Self { root, config }
    }

    /// Validated configuration for this run
    pub fn config(&self) -> &MulticatConfig {
        &self.config
    }

    /// Discover text files under the root.
    pub fn collect(&self, request: &RunRequest) -> Result<Vec<PathBuf>, MulticatError> {
        let walker_config = self.config.walker_config(request.max_depth, request.sniff);
        Walker::with_config(self.root.clone(), walker_config).walk()
    }

    /// Run the full pipeline.
    ///
    /// Per-file read failures are written to `diagnostics` and the file is
    /// left out of the report; only fatal errors are returned.
    pub fn execute(
        &self,
        request: &RunRequest,
        sink: &mut dyn OutputSink,
        diagnostics: &mut dyn Write,
    ) -> Result<RunOutcome, MulticatError> {
        let files = self.collect(request)?;

        if files.is_empty() {
            info!(root = %self.root.display(), "No text files found");
            return Ok(RunOutcome::NoFiles {
                root: self.root.clone(),
            });
        }

        let mut failures = Vec::new();
        let records = read_records(&files, |e| failures.push(e.to_string()));
        for failure in &failures {
            writeln!(diagnostics, "{}", failure)?;
        }

        let report = Report::from_records(&records);
        debug!(
            files = report.file_count(),
            skipped = failures.len(),
            "Delivering report"
        );
        sink.deliver(&report.render())?;

        Ok(RunOutcome::Delivered {
            files: report.file_count(),
            skipped: failures.len(),
        })
    }
}
