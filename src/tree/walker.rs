//! Filesystem walker collecting text files under a root directory

use crate::error::MulticatError;
use crate::ignore::IgnoreSet;
use crate::tree::classify::{Classifier, TextClassification};
use crate::tree::path::{display_root, relative_depth, relative_to, strip_current_dir};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Filesystem walker configuration
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false; loops are not detected)
    pub follow_symlinks: bool,
    /// Component names to ignore
    pub ignore: IgnoreSet,
    /// Maximum depth to include (None = unlimited, direct children have depth 1)
    pub max_depth: Option<usize>,
    /// Text classifier applied to every visited entry
    pub classifier: Classifier,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            ignore: IgnoreSet::builtin(),
            max_depth: None,
            classifier: Classifier::default(),
        }
    }
}

impl WalkerConfig {
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_ignore(mut self, ignore: IgnoreSet) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Fail with `InvalidRoot` unless the root is an existing directory
    pub fn validate_root(&self) -> Result<(), MulticatError> {
        if !self.root.is_dir() {
            return Err(MulticatError::InvalidRoot(self.root.clone()));
        }
        Ok(())
    }

    /// Walk the filesystem and collect text files
    ///
    /// Entries are returned in traversal order, as the root joined with the
    /// entry's relative path minus any `.` components. Ignored directories are not
    /// pruned: their entries are visited and dropped one by one. Entries that
    /// cannot be read during the walk are logged and skipped.
    pub fn walk(&self) -> Result<Vec<PathBuf>, MulticatError> {
        self.validate_root()?;

        debug!(
            root = %display_root(&self.root).display(),
            max_depth = ?self.config.max_depth,
            "Walking directory"
        );

        let mut files = Vec::new();

        // Depth 0 is the root itself and never a candidate
        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable entry");
                    continue;
                }
            };

            if self.should_ignore(&entry) {
                continue;
            }

            if self.config.classifier.classify(entry.path()) != TextClassification::Text {
                continue;
            }

            let depth = relative_depth(&self.root, entry.path());
            if !self.within_depth(depth) {
                continue;
            }

            debug!(path = %entry.path().display(), depth, "Found text file");
            files.push(strip_current_dir(entry.path()));
        }

        debug!(count = files.len(), "Walk complete");
        Ok(files)
    }

    /// Check the entry's path below the root against the ignore set
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        self.config
            .ignore
            .should_ignore(relative_to(&self.root, entry.path()))
    }

    fn within_depth(&self, depth: usize) -> bool {
        self.config
            .max_depth
            .map_or(true, |max_depth| depth <= max_depth)
    }
}

/// List text files under `root` with the built-in ignore set.
pub fn list_text_files(
    root: &Path,
    max_depth: Option<usize>,
) -> Result<Vec<PathBuf>, MulticatError> {
    let config = WalkerConfig::default().with_max_depth(max_depth);
    Walker::with_config(root.to_path_buf(), config).walk()
}
