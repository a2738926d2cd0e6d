//! Path helpers for walk roots and walked entries

use std::path::{Component, Path, PathBuf};

/// Path of `entry` relative to `root`.
///
/// Falls back to `entry` itself when it does not live under `root`.
pub fn relative_to<'a>(root: &Path, entry: &'a Path) -> &'a Path {
    entry.strip_prefix(root).unwrap_or(entry)
}

/// Number of components between `root` and `entry`.
///
/// A direct child of `root` has depth 1; `root` itself has depth 0.
pub fn relative_depth(root: &Path, entry: &Path) -> usize {
    relative_to(root, entry).components().count()
}

/// Drop leading `.` components so entries under `.` read `a.txt`, not `./a.txt`.
pub fn strip_current_dir(path: &Path) -> PathBuf {
    path.components()
        .skip_while(|c| matches!(c, Component::CurDir))
        .collect()
}

/// Resolve `root` for display in diagnostics.
///
/// Uses dunce so Windows paths stay free of the `\\?\` prefix. Returns the
/// input unchanged when it cannot be canonicalized (e.g. it does not exist).
pub fn display_root(root: &Path) -> PathBuf {
    dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf())
}
