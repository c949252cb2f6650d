//! Directory copy/move: mirror the source tree under the destination root.
//!
//! Directories are created (with the source's permission bits) as the walk
//! reaches them, so every file's parent already exists when the file is
//! copied. The first error aborts the walk; partial output is left as-is.
//! Move removes the source tree only after the whole walk succeeded.

use std::fs::{self, File};
use std::io;
use std::path::Path;
use tracing::{debug, info};

use crate::config::Config;
use crate::errors::{FileOpsError, Result};
use crate::platform::create_dir_all_with_permissions;
use crate::types::{Outcome, TransferKind};
use crate::utils::is_same_or_nested;

use super::atomic::{is_cross_device, try_atomic_move};
use super::file_transfer::create_and_copy;
use super::walk::walk;

/// Copy or move the whole `source_dir` tree to `dest_dir`.
pub fn transfer_dir(
    config: &Config,
    source_dir: &Path,
    dest_dir: &Path,
    kind: TransferKind,
) -> Result<Outcome> {
    if is_same_or_nested(source_dir, dest_dir) {
        return Err(FileOpsError::InvalidDestination {
            source_dir: source_dir.to_path_buf(),
            dest: dest_dir.to_path_buf(),
        });
    }

    if kind == TransferKind::Move
        && config.prefer_rename
        && source_dir.is_dir()
        && fs::symlink_metadata(dest_dir).is_err()
    {
        match try_atomic_move(source_dir, dest_dir) {
            Ok(()) => {
                info!(src = %source_dir.display(), dest = %dest_dir.display(), "renamed directory");
                return Ok(Outcome::DirectoryMoved);
            }
            Err(e) => {
                debug!(
                    error = %e,
                    cross_device = is_cross_device(&e),
                    "directory rename failed, falling back to copy + remove"
                );
            }
        }
    }

    let copied = copy_tree(source_dir, dest_dir)?;

    match kind {
        TransferKind::Copy => {
            info!(src = %source_dir.display(), dest = %dest_dir.display(), files = copied, "copied directory");
            Ok(Outcome::DirectoryCopied)
        }
        TransferKind::Move => {
            fs::remove_dir_all(source_dir)
                .map_err(|e| FileOpsError::io("remove", source_dir, e))?;
            info!(src = %source_dir.display(), dest = %dest_dir.display(), files = copied, "moved directory");
            Ok(Outcome::DirectoryMoved)
        }
    }
}

/// Walk `source_dir` and mirror it under `dest_dir`. Returns the number of files copied.
fn copy_tree(source_dir: &Path, dest_dir: &Path) -> Result<u64> {
    let mut files = 0u64;
    for entry in walk(source_dir) {
        let entry = entry?;
        let rel = entry
            .path
            .strip_prefix(source_dir)
            .map_err(|e| FileOpsError::io("relativize", &entry.path, io::Error::other(e)))?;
        // The root maps onto the destination itself, not `dest_dir/`.
        let dest_path = if rel.as_os_str().is_empty() {
            dest_dir.to_path_buf()
        } else {
            dest_dir.join(rel)
        };

        if entry.is_dir {
            let mirrored = match &entry.permissions {
                Some(perms) => create_dir_all_with_permissions(&dest_path, perms),
                None => fs::create_dir_all(&dest_path),
            };
            mirrored.map_err(|e| FileOpsError::io("mkdir", &dest_path, e))?;
            debug!(path = %dest_path.display(), "mirrored directory");
            continue;
        }

        copy_raw(&entry.path, &dest_path)?;
        files += 1;
    }
    Ok(files)
}

/// Open, create, stream. Does not create the parent directory.
fn copy_raw(src_path: &Path, dest_path: &Path) -> Result<()> {
    let mut src = File::open(src_path).map_err(|e| FileOpsError::io("open", src_path, e))?;
    let bytes = create_and_copy(&mut src, dest_path)?;
    debug!(src = %src_path.display(), dest = %dest_path.display(), bytes, "copied file");
    Ok(())
}
