/// Scanner: validates the sort root and classifies every file beneath it.
///
/// The scan completes before anything is moved, so the tree being walked is
/// never mutated mid-walk.
pub mod walk;

use crate::config::SortOptions;
use crate::error::{Result, SortError};
use crate::model::ScanResult;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub use walk::walk_tree;

/// Scan `root`, grouping files by category.
///
/// Fails only when the root itself is missing, not a directory, or cannot
/// be listed. Unreadable subdirectories are recorded in
/// [`ScanResult::skipped`] and the walk carries on.
pub fn scan(root: &Path, options: &SortOptions) -> Result<ScanResult> {
    let root = open_root(root)?;
    info!("Scanning {}", root.display());
    Ok(walk_tree(&root, options))
}

/// Check that `root` is a listable directory and return its canonical path.
pub fn open_root(root: &Path) -> Result<PathBuf> {
    let meta =
        fs::metadata(root).map_err(|e| SortError::from_root_io(root.to_path_buf(), e))?;
    if !meta.is_dir() {
        return Err(SortError::RootNotDirectory {
            path: root.to_path_buf(),
        });
    }
    fs::read_dir(root).map_err(|e| SortError::from_root_io(root.to_path_buf(), e))?;
    fs::canonicalize(root).map_err(|e| SortError::from_root_io(root.to_path_buf(), e))
}
