//! File discovery
//!
//! Walks a root directory and yields the text files beneath it, applying the
//! ignore set, the text classifier, and an optional depth bound.

pub mod classify;
pub mod path;
pub mod walker;

pub use classify::{guess_content_type, is_text_file, Classifier, TextClassification};
pub use walker::{list_text_files, Walker, WalkerConfig};
