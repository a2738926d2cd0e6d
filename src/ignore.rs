//! Ignore set for directory walks.
//!
//! An ignore set is a fixed collection of literal names (version-control
//! metadata, dependency caches, tool caches). A path is ignored when any one
//! of its normal components equals a name in the set. Matching is done per
//! component, never on the joined path string, so `src/environment.txt` is
//! kept even though `env` is an ignored name.

use std::collections::BTreeSet;
use std::path::{Component, Path};
use std::sync::LazyLock;

/// Built-in ignore names, applied to every walk.
pub const BUILTIN_DEFAULTS: &[&str] = &[
    "node_modules",
    "venv",
    "env",
    ".git",
    ".vscode",
    ".idea",
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
    ".tox",
    ".eggs",
    ".venv",
    ".nox",
    ".cache",
    ".serverless",
    ".serverless_plugins",
];

static BUILTIN: LazyLock<IgnoreSet> = LazyLock::new(IgnoreSet::builtin);

/// Set of path component names excluded from walk results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
    names: BTreeSet<String>,
}

impl IgnoreSet {
    /// The built-in set.
    pub fn builtin() -> Self {
        Self::from_names(BUILTIN_DEFAULTS.iter().copied())
    }

    /// A set that ignores nothing.
    pub fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Extend the set with additional names (e.g. from configuration).
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(extra.into_iter().map(Into::into));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Check whether any component of `path` is an ignored name.
    ///
    /// Root, prefix, `.` and `..` components never match.
    pub fn should_ignore(&self, path: &Path) -> bool {
        path.components().any(|component| match component {
            Component::Normal(name) => name.to_str().is_some_and(|n| self.names.contains(n)),
            _ => false,
        })
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Check `path` against the built-in ignore set.
pub fn should_ignore(path: &Path) -> bool {
    BUILTIN.should_ignore(path)
}

/// Validate a user-supplied ignore name. Names are single components.
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Ignore name cannot be empty".to_string());
    }
    if name.contains('/') || name.contains('\\') {
        return Err(format!(
            "Ignore name '{}' must be a single path component",
            name
        ));
    }
    if name == "." || name == ".." {
        return Err(format!("Ignore name '{}' is not allowed", name));
    }
    Ok(())
}
