//! Depth-first tree walk.
//!
//! Every entry under the root (the root included) is yielded lazily, a
//! directory before its children, siblings in file-name order. Symlinks are
//! not followed and show up as non-directory entries.

use std::fs::Permissions;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One visited filesystem entry.
#[derive(Debug, Clone)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub is_dir: bool,
    /// Permissions of a directory entry; `None` for everything else.
    pub permissions: Option<Permissions>,
}

impl WalkEntry {
    /// Final path component, or the whole path for roots like `/`.
    pub fn file_name(&self) -> &std::ffi::OsStr {
        self.path
            .file_name()
            .unwrap_or_else(|| self.path.as_os_str())
    }
}

/// Lazy iterator over a directory tree. A missing or unreadable root shows up
/// as the first (and only) item being an error.
pub struct TreeWalk {
    inner: walkdir::IntoIter,
}

pub fn walk(root: &Path) -> TreeWalk {
    TreeWalk {
        inner: WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter(),
    }
}

impl Iterator for TreeWalk {
    type Item = Result<WalkEntry, walkdir::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = match self.inner.next()? {
            Ok(entry) => entry,
            Err(e) => return Some(Err(e)),
        };
        let is_dir = entry.file_type().is_dir();
        let permissions = if is_dir {
            match entry.metadata() {
                Ok(m) => Some(m.permissions()),
                Err(e) => return Some(Err(e)),
            }
        } else {
            None
        };
        Some(Ok(WalkEntry {
            is_dir,
            permissions,
            path: entry.into_path(),
        }))
    }
}
