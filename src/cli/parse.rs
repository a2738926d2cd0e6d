//! CLI parse: clap types for multicat. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Concatenate the contents of all text files in a directory.
#[derive(Parser, Debug)]
#[command(name = "multicat", version)]
#[command(about = "Concatenate the contents of all text files in a directory")]
pub struct Cli {
    /// The directory to search for text files.
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Copy the concatenated contents to the clipboard instead of printing them
    #[arg(short = 'c', long)]
    pub copy: bool,

    /// Maximum depth of subdirectories to search.
    #[arg(short = 'd', long)]
    pub max_depth: Option<usize>,

    /// Sniff the first bytes of files with unrecognized extensions
    #[arg(long)]
    pub sniff: bool,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging on stderr (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}
