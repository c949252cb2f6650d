//! Delete a single file or a whole directory subtree.
//! Existence is proven by opening the target; the handle is closed before removal.

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::{FileOpsError, Result};
use crate::platform::open_probe;
use crate::types::{DeleteRequest, Outcome, Target};

pub fn delete(req: &DeleteRequest) -> Result<Outcome> {
    match &req.target {
        Target::File(name) => delete_file(&req.path, name),
        Target::Directory => delete_directory(&req.path),
    }
}

/// Remove `dir/file_name`. Any failure to open it reads as "not present".
pub fn delete_file(dir: &Path, file_name: &str) -> Result<Outcome> {
    let path = dir.join(file_name);
    match open_probe(&path) {
        Ok(handle) => drop(handle),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "delete probe failed");
            return Err(FileOpsError::FileNotPresent);
        }
    }
    fs::remove_file(&path).map_err(|e| FileOpsError::io("remove", &path, e))?;
    info!(path = %path.display(), "deleted file");
    Ok(Outcome::FileDeleted)
}

/// Remove `dir` and everything beneath it (or just `dir` when it is a file).
pub fn delete_directory(dir: &Path) -> Result<Outcome> {
    match open_probe(dir) {
        Ok(handle) => drop(handle),
        Err(e) => {
            debug!(path = %dir.display(), error = %e, "delete probe failed");
            return Err(FileOpsError::DirectoryNotFound);
        }
    }
    // A path that is not a directory is removed on its own.
    let is_dir = fs::symlink_metadata(dir).is_ok_and(|m| m.is_dir());
    let removed = if is_dir {
        fs::remove_dir_all(dir)
    } else {
        fs::remove_file(dir)
    };
    removed.map_err(|e| FileOpsError::io("remove", dir, e))?;
    info!(path = %dir.display(), "deleted directory");
    Ok(Outcome::DirectoryDeleted)
}
