//! Same-volume rename used as a fast path for moves.
//! - On Windows, removes an existing destination file first (rename doesn't overwrite there).
//! - Failures are returned untouched; callers fall back to copy + remove.

use std::fs;
use std::io;
use std::path::Path;

pub(super) fn try_atomic_move(src: &Path, dst: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        if dst.is_file() {
            match fs::remove_file(dst) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e),
            }
        }
    }
    fs::rename(src, dst)
}

/// EXDEV / ERROR_NOT_SAME_DEVICE: the rename can never work for this pair.
pub(super) fn is_cross_device(e: &io::Error) -> bool {
    match e.raw_os_error() {
        #[cfg(unix)]
        Some(code) => code == libc::EXDEV,
        #[cfg(windows)]
        Some(code) => code == 17,
        #[cfg(not(any(unix, windows)))]
        Some(_) => false,
        None => false,
    }
}
