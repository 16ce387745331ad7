//! File-based detection.

use std::path::{Path, PathBuf};

/// Check if a regular file exists relative to a repository root.
pub fn file_exists(root: &Path, file: &str) -> bool {
    root.join(file).is_file()
}

/// Return the first of `files` that exists, in the given order.
pub fn first_existing(root: &Path, files: &[&str]) -> Option<PathBuf> {
    files
        .iter()
        .map(|f| root.join(f))
        .find(|p| p.is_file())
}
