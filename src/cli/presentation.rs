//! CLI presentation: user-facing messages for run outcomes.

use crate::cli::route::RunOutcome;
use std::path::Path;

pub fn format_no_files(root: &Path) -> String {
    format!("No text files found in {}", root.display())
}

/// Message printed on stdout once the run finished, if any.
///
/// `confirmation` is the sink's delivery confirmation.
pub fn format_outcome(outcome: &RunOutcome, confirmation: Option<&str>) -> Option<String> {
    match outcome {
        RunOutcome::NoFiles { root } => Some(format_no_files(root)),
        RunOutcome::Delivered { .. } => confirmation.map(str::to_string),
    }
}
