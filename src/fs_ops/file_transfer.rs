//! Single-file copy and move.
//!
//! Copy: open the source, make sure the destination directory exists, then
//! create (truncate) the destination file and stream bytes into it.
//! Move: the same, followed by removing the source. With `prefer_rename` a
//! same-volume rename is tried first; any rename failure falls back to
//! copy + remove. A failed removal leaves both copies in place.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Config;
use crate::errors::{FileOpsError, Result};
use crate::types::Outcome;
use crate::utils::is_same_existing_file;

use super::atomic::{is_cross_device, try_atomic_move};
use super::io_copy::copy_between;

/// Copy `source_dir/file_name` into `dest_dir`, creating `dest_dir` if needed.
pub fn copy_file(source_dir: &Path, dest_dir: &Path, file_name: &str) -> Result<Outcome> {
    let (mut src, src_path, dest_path) = prepare(source_dir, dest_dir, file_name)?;
    let bytes = create_and_copy(&mut src, &dest_path)?;
    info!(src = %src_path.display(), dest = %dest_path.display(), bytes, "copied file");
    Ok(Outcome::FileCopied)
}

/// Move `source_dir/file_name` into `dest_dir`.
pub fn move_file(
    config: &Config,
    source_dir: &Path,
    dest_dir: &Path,
    file_name: &str,
) -> Result<Outcome> {
    let (mut src, src_path, dest_path) = prepare(source_dir, dest_dir, file_name)?;

    // A named file must stay one file; anything else goes down the copy path.
    let regular = src.metadata().is_ok_and(|m| m.is_file());
    if config.prefer_rename && regular {
        match try_atomic_move(&src_path, &dest_path) {
            Ok(()) => {
                info!(src = %src_path.display(), dest = %dest_path.display(), "renamed file");
                return Ok(Outcome::FileMoved);
            }
            Err(e) => {
                debug!(
                    error = %e,
                    cross_device = is_cross_device(&e),
                    "rename failed, falling back to copy + remove"
                );
            }
        }
    }

    let bytes = create_and_copy(&mut src, &dest_path)?;
    // Close before removing; Windows refuses to delete open files.
    drop(src);
    fs::remove_file(&src_path).map_err(|e| FileOpsError::io("remove", &src_path, e))?;
    info!(src = %src_path.display(), dest = %dest_path.display(), bytes, "moved file");
    Ok(Outcome::FileMoved)
}

/// Open the source and ensure the destination directory exists, in that order.
fn prepare(
    source_dir: &Path,
    dest_dir: &Path,
    file_name: &str,
) -> Result<(File, PathBuf, PathBuf)> {
    let src_path = source_dir.join(file_name);
    let src = File::open(&src_path).map_err(|e| {
        debug!(path = %src_path.display(), error = %e, "cannot open source file");
        FileOpsError::OpenFailed {
            file: file_name.to_string(),
            dir: source_dir.to_path_buf(),
        }
    })?;

    create_folder_if_not_exist(dest_dir)?;

    let dest_path = dest_dir.join(file_name);
    if is_same_existing_file(&src_path, &dest_path) {
        return Err(FileOpsError::SameFile(dest_path));
    }
    Ok((src, src_path, dest_path))
}

/// `mkdir -p` only when the directory is reported missing; any other stat
/// outcome is left for the file creation step to surface.
pub(super) fn create_folder_if_not_exist(dir: &Path) -> Result<()> {
    match fs::metadata(dir) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(dir).map_err(|e| FileOpsError::io("mkdir", dir, e))?;
            debug!(path = %dir.display(), "created destination directory");
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Create (truncate) `dest_path` and stream the rest of `src` into it.
pub(super) fn create_and_copy(src: &mut File, dest_path: &Path) -> Result<u64> {
    let mut dest = File::create(dest_path).map_err(|e| FileOpsError::io("open", dest_path, e))?;
    copy_between(src, &mut dest).map_err(|e| FileOpsError::io("copy", dest_path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn copy_creates_missing_destination_tree() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("files/test_gc.pdf").write_binary(b"%PDF-1.4").unwrap();
        let dest = temp.child("Dummy3/nested");

        let out = copy_file(&temp.path().join("files"), dest.path(), "test_gc.pdf").unwrap();
        assert_eq!(out.to_string(), "File copied successfully!");
        dest.child("test_gc.pdf").assert(&b"%PDF-1.4"[..]);
        temp.child("files/test_gc.pdf").assert(&b"%PDF-1.4"[..]);
    }

    #[test]
    fn copy_of_missing_source_names_file_and_dir() {
        let temp = assert_fs::TempDir::new().unwrap();
        let src_dir = temp.path().join("D");
        let err = copy_file(&src_dir, &temp.path().join("out"), "doc.pdf").unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("failed to open doc.pdf file in given directory {}", src_dir.display())
        );
        // nothing was created for the failed request
        assert!(!temp.path().join("out").exists());
    }

    #[test]
    fn move_without_rename_removes_source() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("a/x.txt").write_str("payload").unwrap();
        let cfg = Config {
            prefer_rename: false,
            ..Config::default()
        };

        let out = move_file(&cfg, &temp.path().join("a"), &temp.path().join("b"), "x.txt").unwrap();
        assert_eq!(out, Outcome::FileMoved);
        temp.child("b/x.txt").assert("payload");
        assert!(!temp.path().join("a/x.txt").exists());
    }

    #[test]
    fn copy_onto_itself_is_refused() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("x.txt").write_str("keep me").unwrap();
        let err = copy_file(temp.path(), temp.path(), "x.txt").unwrap_err();
        assert!(matches!(err, FileOpsError::SameFile(_)));
        temp.child("x.txt").assert("keep me");
    }
}
