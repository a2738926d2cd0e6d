//! Multicat: concatenate the text files of a directory tree
//!
//! Walks a root directory, skips well-known noise directories (version
//! control metadata, dependency and tool caches), keeps files whose
//! extension maps to a text content type, and renders their contents as a
//! single report for standard output or the clipboard.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod ignore;
pub mod logging;
pub mod sink;
pub mod tree;

pub use aggregate::{format_entry, read_file_contents, FileRecord, Report};
pub use error::MulticatError;
pub use ignore::{should_ignore, IgnoreSet};
pub use tree::{is_text_file, list_text_files, TextClassification};
