//! Content aggregation: read discovered files and render the report.
//!
//! Each file renders as a block:
//!
//! ```text
//! File: <path>
//!
//! <contents>
//!
//! --------------------------------------------------
//! ```
//!
//! Blocks are joined with a single newline in walk order.

use crate::error::MulticatError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Width of the dash line closing every block.
pub const SEPARATOR_WIDTH: usize = 50;

const HEADER_PREFIX: &str = "File: ";

/// A discovered file and its contents, `None` when it could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub contents: Option<String>,
}

impl FileRecord {
    /// Whether this record contributes a block to the report.
    ///
    /// Unreadable and empty files are left out.
    pub fn is_reportable(&self) -> bool {
        self.contents.as_deref().is_some_and(|c| !c.is_empty())
    }
}

/// Read a whole file as UTF-8 text.
pub fn read_file_contents(path: &Path) -> Result<String, MulticatError> {
    fs::read_to_string(path).map_err(|source| MulticatError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Render one file as a report block, including its trailing newline.
pub fn format_entry(path: &Path, contents: &str) -> String {
    format!(
        "{}{}\n\n{}\n\n{}\n",
        HEADER_PREFIX,
        path.display(),
        contents,
        separator()
    )
}

/// Split a single block back into its path and contents.
///
/// Returns `None` when `block` is not a well-formed block.
pub fn parse_entry(block: &str) -> Option<(PathBuf, String)> {
    let rest = block.strip_prefix(HEADER_PREFIX)?;
    let (path, rest) = rest.split_once('\n')?;
    let rest = rest.strip_prefix('\n')?;
    let footer = format!("\n\n{}\n", separator());
    let contents = rest.strip_suffix(footer.as_str())?;
    Some((PathBuf::from(path), contents.to_string()))
}

/// Read every path in order. Failures are passed to `on_error` and recorded
/// as records without contents; they never stop the remaining reads.
pub fn read_records<F>(paths: &[PathBuf], mut on_error: F) -> Vec<FileRecord>
where
    F: FnMut(&MulticatError),
{
    paths
        .iter()
        .map(|path| {
            let contents = match read_file_contents(path) {
                Ok(contents) => Some(contents),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unreadable file");
                    on_error(&e);
                    None
                }
            };
            FileRecord {
                path: path.clone(),
                contents,
            }
        })
        .collect()
}

/// Concatenated report built from file records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    blocks: Vec<String>,
}

impl Report {
    pub fn from_records(records: &[FileRecord]) -> Self {
        let blocks: Vec<String> = records
            .iter()
            .filter(|r| r.is_reportable())
            .filter_map(|r| r.contents.as_deref().map(|c| format_entry(&r.path, c)))
            .collect();
        debug!(blocks = blocks.len(), records = records.len(), "Report built");
        Self { blocks }
    }

    /// Number of files rendered into the report
    pub fn file_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    pub fn render(&self) -> String {
        self.blocks.join("\n")
    }
}
