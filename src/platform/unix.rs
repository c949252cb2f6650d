//! Unix implementations of platform helpers.

use std::fs::{self, DirBuilder, File, OpenOptions, Permissions};
use std::io::{self, Write};
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt, PermissionsExt};
use std::path::Path;

/// Open `path` read-only to prove it exists and is accessible.
/// Directories open fine on Unix, so one probe serves files and trees.
pub fn open_probe(path: &Path) -> io::Result<File> {
    File::open(path)
}

/// `mkdir -p` applying the mode of `perms` to every directory it creates.
/// Existing directories keep their mode.
pub fn create_dir_all_with_permissions(path: &Path, perms: &Permissions) -> io::Result<()> {
    DirBuilder::new()
        .recursive(true)
        .mode(perms.mode() & 0o7777)
        .create(path)
}

/// Open log file for appending; set 0600 only when creating a new file.
/// If the file already exists, we preserve its existing permissions.
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let existed = path.exists();
    let f = OpenOptions::new()
        .create(true)
        .append(true)
        .mode(0o600) // applies on create
        .open(path)?;
    if !existed {
        let _ = fs::set_permissions(path, Permissions::from_mode(0o600));
    }
    Ok(f)
}

/// Create a new config file with 0600 permissions. Fails if it already exists.
pub fn write_config_secure_new_0600(path: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut f = OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(0o600)
        .open(path)?;
    f.write_all(contents)?;
    f.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn created_dirs_take_requested_mode() {
        let td = tempdir().unwrap();
        let target = td.path().join("a").join("b");
        create_dir_all_with_permissions(&target, &Permissions::from_mode(0o750)).unwrap();
        let mode = fs::metadata(&target).unwrap().permissions().mode() & 0o777;
        // umask may only clear bits
        assert_eq!(mode & !0o750, 0);
        assert!(target.is_dir());
    }

    #[test]
    fn config_write_refuses_existing_file() {
        let td = tempdir().unwrap();
        let p = td.path().join("cfg").join("config.xml");
        write_config_secure_new_0600(&p, b"<config/>").unwrap();
        let mode = fs::metadata(&p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
        let err = write_config_secure_new_0600(&p, b"<config/>").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn probe_opens_directories() {
        let td = tempdir().unwrap();
        assert!(open_probe(td.path()).is_ok());
        assert!(open_probe(&td.path().join("missing")).is_err());
    }
}
