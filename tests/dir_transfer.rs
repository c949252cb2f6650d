use assert_fs::prelude::*;
use std::fs;
use std::path::Path;

use fileman::{Config, FileOpsError, Outcome, Target, TransferKind, TransferRequest, transfer, transfer_dir};

fn cfg(prefer_rename: bool) -> Config {
    Config {
        prefer_rename,
        ..Config::default()
    }
}

fn seed(root: &Path) {
    fs::create_dir_all(root.join("a/b")).unwrap();
    fs::write(root.join("top.txt"), "top").unwrap();
    fs::write(root.join("a/mid.txt"), "mid").unwrap();
    fs::write(root.join("a/b/leaf.bin"), [0u8, 1, 2, 3, 255]).unwrap();
}

fn assert_seeded(root: &Path) {
    assert_eq!(fs::read_to_string(root.join("top.txt")).unwrap(), "top");
    assert_eq!(fs::read_to_string(root.join("a/mid.txt")).unwrap(), "mid");
    assert_eq!(fs::read(root.join("a/b/leaf.bin")).unwrap(), vec![0u8, 1, 2, 3, 255]);
}

#[test]
fn copy_directory_reproduces_relative_paths() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.path().join("src");
    let dst = temp.path().join("dst");
    seed(&src);

    let out = transfer_dir(&cfg(true), &src, &dst, TransferKind::Copy).unwrap();
    assert_eq!(out.to_string(), "Directory copied successfully");
    assert_seeded(&dst);
    assert_seeded(&src);
}

#[test]
fn copy_directory_into_existing_destination_merges() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("dst/already.txt").write_str("here").unwrap();
    let src = temp.path().join("src");
    seed(&src);

    transfer_dir(&cfg(false), &src, &temp.path().join("dst"), TransferKind::Copy).unwrap();
    assert_seeded(&temp.path().join("dst"));
    temp.child("dst/already.txt").assert("here");
}

#[test]
fn move_directory_removes_source_either_way() {
    for prefer_rename in [true, false] {
        let temp = assert_fs::TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        seed(&src);

        let req = TransferRequest::new(&src, &dst, Target::Directory, TransferKind::Move);
        let out = transfer(&cfg(prefer_rename), &req).unwrap();
        assert_eq!(out, Outcome::DirectoryMoved);
        assert_eq!(out.to_string(), "Directory moved successfully");
        assert!(!src.exists());
        assert_seeded(&dst);
    }
}

#[test]
fn destination_inside_source_is_rejected_before_any_write() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.path().join("src");
    seed(&src);
    let nested = src.join("a/inner");

    let err = transfer_dir(&cfg(false), &src, &nested, TransferKind::Copy).unwrap_err();
    assert!(matches!(err, FileOpsError::InvalidDestination { .. }));
    assert!(!nested.exists());

    let err = transfer_dir(&cfg(true), &src, &src, TransferKind::Move).unwrap_err();
    assert!(matches!(err, FileOpsError::InvalidDestination { .. }));
    assert_seeded(&src);
}

#[test]
fn missing_source_directory_fails() {
    let temp = assert_fs::TempDir::new().unwrap();
    let dst = temp.path().join("dst");
    let err = transfer_dir(&cfg(false), &temp.path().join("ghost"), &dst, TransferKind::Copy)
        .unwrap_err();
    assert!(matches!(err, FileOpsError::Walk(_)));
    assert!(!dst.exists());
}

#[cfg(unix)]
fn running_as_root() -> bool {
    unsafe { libc::geteuid() == 0 }
}

#[cfg(unix)]
#[test]
fn directory_permission_bits_are_mirrored() {
    use std::os::unix::fs::PermissionsExt;

    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.path().join("src");
    seed(&src);
    fs::set_permissions(src.join("a"), fs::Permissions::from_mode(0o750)).unwrap();

    let dst = temp.path().join("dst");
    transfer_dir(&cfg(false), &src, &dst, TransferKind::Copy).unwrap();

    let mode = fs::metadata(dst.join("a")).unwrap().permissions().mode() & 0o777;
    // umask may only clear bits
    assert_eq!(mode & !0o750, 0);
    assert_eq!(mode & 0o700, 0o700);
}

#[cfg(unix)]
#[test]
fn unreadable_subdirectory_aborts_move_and_keeps_source() {
    use std::os::unix::fs::PermissionsExt;

    if running_as_root() {
        eprintln!("skipping: permission checks do not apply to root");
        return;
    }

    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.path().join("src");
    seed(&src);
    let locked = src.join("a/b");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let dst = temp.path().join("dst");
    let res = transfer_dir(&cfg(false), &src, &dst, TransferKind::Move);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(res.is_err(), "walk must stop at the unreadable directory");
    assert!(src.exists(), "source is only removed after a complete copy");
    assert_seeded(&src);
}

#[cfg(unix)]
#[test]
fn failed_tree_removal_keeps_the_complete_copy() {
    use std::os::unix::fs::PermissionsExt;

    if running_as_root() {
        eprintln!("skipping: permission checks do not apply to root");
        return;
    }

    let temp = assert_fs::TempDir::new().unwrap();
    let outer = temp.path().join("outer");
    let src = outer.join("src");
    seed(&src);
    fs::set_permissions(&outer, fs::Permissions::from_mode(0o555)).unwrap();

    let dst = temp.path().join("dst");
    let res = transfer_dir(&cfg(false), &src, &dst, TransferKind::Move);

    fs::set_permissions(&outer, fs::Permissions::from_mode(0o755)).unwrap();

    let err = res.unwrap_err();
    assert!(matches!(err, FileOpsError::Io { op: "remove", .. }), "{err}");
    assert_seeded(&dst);
    assert!(src.exists(), "source directory stays when it cannot be removed");
}
