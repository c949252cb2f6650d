//! Streaming copy between two open handles.
//!
//! - Linux: in-kernel `copy_file_range` when the filesystems support it.
//! - Everywhere else (or when the kernel refuses): buffered `io::copy` with
//!   large (1 MiB) buffers to reduce syscall count.
//!
//! Snapshot semantics: the source is read once from its current position to
//! EOF; bytes appended concurrently after EOF is observed are not included.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

const BUF_SIZE: usize = 1024 * 1024; // 1 MiB buffers

/// Copy everything left in `src` into `dst`. Returns the number of bytes written.
/// Neither handle is closed here; callers own both.
pub(crate) fn copy_between(src: &mut File, dst: &mut File) -> io::Result<u64> {
    #[cfg(target_os = "linux")]
    {
        if let Some(total) = copy_file_range_all(src, dst)? {
            return Ok(total);
        }
    }

    let mut reader = BufReader::with_capacity(BUF_SIZE, src);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, dst);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    Ok(bytes)
}

/// Returns `Ok(None)` when the kernel cannot do the copy and nothing was
/// transferred yet, so the caller may fall back to streaming.
#[cfg(target_os = "linux")]
fn copy_file_range_all(src: &File, dst: &File) -> io::Result<Option<u64>> {
    use std::os::unix::io::AsRawFd;

    let chunk: usize = 16 * 1024 * 1024; // 16 MiB per call
    let mut total: u64 = 0;
    loop {
        let rc = unsafe {
            libc::copy_file_range(
                src.as_raw_fd(),
                std::ptr::null_mut(),
                dst.as_raw_fd(),
                std::ptr::null_mut(),
                chunk,
                0,
            )
        };
        if rc > 0 {
            total += rc as u64;
            continue;
        }
        if rc == 0 {
            return Ok(Some(total));
        }
        let err = io::Error::last_os_error();
        if err.kind() == io::ErrorKind::Interrupted {
            continue;
        }
        if total == 0 {
            match err.raw_os_error() {
                Some(code)
                    if code == libc::EXDEV
                        || code == libc::ENOSYS
                        || code == libc::EINVAL
                        || code == libc::EPERM
                        || code == libc::EOPNOTSUPP =>
                {
                    return Ok(None);
                }
                _ => {}
            }
        }
        return Err(err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn copy_paths(src: &std::path::Path, dst: &std::path::Path) -> io::Result<u64> {
        let mut s = File::open(src)?;
        let mut d = File::create(dst)?;
        copy_between(&mut s, &mut d)
    }

    #[test]
    fn copy_small_file_ok() {
        let dir = tempdir().unwrap();
        let src_path = dir.path().join("src.txt");
        let dst_path = dir.path().join("dst.txt");

        let data = b"hello world";
        fs::write(&src_path, data).unwrap();

        let n = copy_paths(&src_path, &dst_path).unwrap();
        assert_eq!(n, data.len() as u64);
        assert_eq!(fs::read(&dst_path).unwrap(), data);
    }

    #[test]
    fn copy_zero_length_ok() {
        let dir = tempdir().unwrap();
        let src_path = dir.path().join("empty");
        let dst_path = dir.path().join("out");
        File::create(&src_path).unwrap();

        let n = copy_paths(&src_path, &dst_path).unwrap();
        assert_eq!(n, 0);
        assert_eq!(fs::metadata(&dst_path).unwrap().len(), 0);
    }

    #[test]
    fn large_file_copy_boundary() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("big.bin");
        let dst = dir.path().join("big.out");

        // Crosses multiple buffer boundaries
        let size = 2 * BUF_SIZE + 123;
        let data: Vec<u8> = (0..size).map(|i| (i % 251) as u8).collect();
        fs::write(&src, &data).unwrap();

        let n = copy_paths(&src, &dst).unwrap();
        assert_eq!(n as usize, size);
        assert_eq!(fs::read(&dst).unwrap(), data);
    }

    #[test]
    fn overwrites_existing_destination() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("s");
        let dst = dir.path().join("d");
        fs::write(&src, b"new").unwrap();
        fs::write(&dst, b"much longer old content").unwrap();

        copy_paths(&src, &dst).unwrap();
        assert_eq!(fs::read(&dst).unwrap(), b"new");
    }
}
