//! I/O error hints.
//!
//! Maps an `io::Error` to a short, actionable hint for logs. The error itself
//! is never rewritten; callers log the hint next to the untouched message.
//!
//! Usage:
//!   if let Some(hint) = err.io_error().and_then(os_hint) {
//!       warn!(hint, "...");
//!   }

use std::io;

#[cfg(unix)]
use libc;

/// Platform-aware hint for a raw OS error code, falling back to `ErrorKind`.
pub fn os_hint(e: &io::Error) -> Option<&'static str> {
    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            let hint = match code {
                libc::EACCES | libc::EPERM => {
                    Some("permission denied; check ownership and write permissions")
                }
                libc::EXDEV => Some("cross-filesystem; atomic rename not possible"),
                libc::EBUSY => Some("resource busy; ensure no other process is using it"),
                libc::ENOENT => Some("path not found; verify it exists"),
                libc::EEXIST => Some("already exists; remove the target first"),
                libc::ENOTEMPTY => Some("directory not empty"),
                libc::EISDIR => Some("is a directory; leave the file name empty to target it"),
                libc::ENOTDIR => Some("a path component is not a directory"),
                libc::ENOSPC => Some("insufficient space on device"),
                libc::EROFS => Some("read-only filesystem; cannot write here"),
                libc::ELOOP => Some("too many symbolic link levels; possible symlink cycle"),
                libc::ENAMETOOLONG => Some("filename or path too long; shorten path segments"),
                libc::EMFILE => Some("process file descriptor limit reached"),
                libc::ENFILE => Some("system-wide file table overflow"),
                _ => None,
            };
            if hint.is_some() {
                return hint;
            }
        }
        #[cfg(windows)]
        {
            let hint = match code {
                5 => Some("access denied; check permissions"), // ERROR_ACCESS_DENIED
                17 => Some("not same device; cross-filesystem move"), // ERROR_NOT_SAME_DEVICE
                32 => Some("sharing violation; file is in use"), // ERROR_SHARING_VIOLATION
                2 | 3 => Some("path not found; verify it exists"), // FILE/PATH NOT FOUND
                80 | 183 => Some("already exists; remove the target first"),
                112 => Some("insufficient disk space"), // ERROR_DISK_FULL
                19 => Some("write protected / read-only media"), // ERROR_WRITE_PROTECT
                206 => Some("filename or path too long"), // ERROR_FILENAME_EXCED_RANGE
                _ => None,
            };
            if hint.is_some() {
                return hint;
            }
        }
        #[cfg(not(any(unix, windows)))]
        let _ = code;
    }

    match e.kind() {
        io::ErrorKind::PermissionDenied => {
            Some("permission denied; check ownership and write permissions")
        }
        io::ErrorKind::NotFound => Some("path not found; verify it exists"),
        io::ErrorKind::AlreadyExists => Some("already exists; remove the target first"),
        _ => None,
    }
}
