use std::fs;
use std::path::{Path, PathBuf};

/// Best-effort canonical form of `p`, which may not exist yet.
/// - Existing paths: `dunce::canonicalize` (no `\\?\` prefixes on Windows).
/// - Missing paths: canonicalize the nearest existing ancestor and re-append the rest.
/// - Nothing resolvable: absolute form relative to the current dir.
pub(crate) fn resolve_best_effort(p: &Path) -> PathBuf {
    if let Ok(real) = dunce::canonicalize(p) {
        return real;
    }
    let mut tail = Vec::new();
    let mut cur = p;
    while let Some(parent) = cur.parent() {
        if let Some(name) = cur.file_name() {
            tail.push(name.to_os_string());
        }
        if let Ok(mut real) = dunce::canonicalize(if parent.as_os_str().is_empty() {
            Path::new(".")
        } else {
            parent
        }) {
            for seg in tail.iter().rev() {
                real.push(seg);
            }
            return real;
        }
        cur = parent;
    }
    std::path::absolute(p).unwrap_or_else(|_| p.to_path_buf())
}

/// True when `dest` is `source` itself or lies somewhere beneath it.
pub(crate) fn is_same_or_nested(source: &Path, dest: &Path) -> bool {
    let src_real = resolve_best_effort(source);
    let dest_real = resolve_best_effort(dest);
    dest_real.starts_with(&src_real)
}

/// True when both paths exist and name the same file.
pub(crate) fn is_same_existing_file(a: &Path, b: &Path) -> bool {
    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(_), Ok(_)) => match (dunce::canonicalize(a), dunce::canonicalize(b)) {
            (Ok(x), Ok(y)) => x == y,
            _ => false,
        },
        _ => false,
    }
}
