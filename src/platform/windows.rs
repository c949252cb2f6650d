//! Windows implementations of platform helpers.
//!
//! Notes:
//! - Windows lacks POSIX mode semantics; only the read-only flag is carried over.
//! - Directory handles need FILE_FLAG_BACKUP_SEMANTICS to be opened at all.

use std::fs::{self, File, OpenOptions, Permissions};
use std::io::{self, Write};
use std::os::windows::fs::OpenOptionsExt;
use std::path::Path;

use windows_sys::Win32::Storage::FileSystem::FILE_FLAG_BACKUP_SEMANTICS;

/// Open `path` read-only to prove it exists and is accessible (files or directories).
pub fn open_probe(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .read(true)
        .custom_flags(FILE_FLAG_BACKUP_SEMANTICS)
        .open(path)
}

/// `mkdir -p`, then mirror the read-only flag onto the leaf directory.
pub fn create_dir_all_with_permissions(path: &Path, perms: &Permissions) -> io::Result<()> {
    fs::create_dir_all(path)?;
    if perms.readonly() {
        let mut p = fs::metadata(path)?.permissions();
        p.set_readonly(true);
        fs::set_permissions(path, p)?;
    }
    Ok(())
}

/// Open log file for appending.
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Create a new config file. Fails if it already exists. No ACL changes.
pub fn write_config_secure_new_0600(path: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut f = OpenOptions::new().write(true).create_new(true).open(path)?;
    f.write_all(contents)?;
    f.sync_all()
}
