//! Listing and name search on top of the tree walk.
//!
//! Both run the walk to completion; any walk error replaces whatever was
//! gathered so far with `DirectoryDoesNotExist`.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::walk::walk;
use crate::errors::{FileOpsError, Result};

/// Result of a name search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Present,
    NotPresent,
}

impl SearchOutcome {
    pub fn is_present(self) -> bool {
        self == SearchOutcome::Present
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SearchOutcome::Present => "file is present in the given directory",
            SearchOutcome::NotPresent => "file is not present in the given directory",
        })
    }
}

/// Every non-directory path under `root`, in walk order.
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in walk(root) {
        let entry = entry.map_err(|e| {
            debug!(root = %root.display(), error = %e, "walk failed while listing");
            FileOpsError::DirectoryDoesNotExist
        })?;
        if !entry.is_dir {
            files.push(entry.path);
        }
    }
    debug!(root = %root.display(), count = files.len(), "listed files");
    Ok(files)
}

/// Exact, case-sensitive base-name match against every file under `root`.
pub fn search(root: &Path, file_name: &str) -> Result<SearchOutcome> {
    let wanted = OsStr::new(file_name);
    let mut outcome = SearchOutcome::NotPresent;
    for entry in walk(root) {
        let entry = entry.map_err(|e| {
            debug!(root = %root.display(), error = %e, "walk failed while searching");
            FileOpsError::DirectoryDoesNotExist
        })?;
        if !entry.is_dir && entry.file_name() == wanted {
            debug!(path = %entry.path.display(), "search hit");
            outcome = SearchOutcome::Present;
        }
    }
    Ok(outcome)
}
