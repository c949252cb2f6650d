//! Default path helpers and symlink checks.
//! Determines the config file location and detects symlinked ancestors for safety.

use anyhow::{Context, Result, anyhow};
use dirs::config_dir;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "FILEMAN_CONFIG";

/// Config path: `$FILEMAN_CONFIG` (relative values resolved against the
/// current directory), else `<config dir>/fileman/config.xml`.
pub fn default_config_path() -> Result<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_ENV) {
        let p = PathBuf::from(p);
        if p.is_absolute() {
            return Ok(p);
        }
        let cwd = env::current_dir().context("resolve current directory")?;
        return Ok(cwd.join(p));
    }
    if let Some(mut base) = config_dir() {
        base.push("fileman");
        base.push("config.xml");
        return Ok(base);
    }
    env::var_os("HOME")
        .map(|h| {
            PathBuf::from(h)
                .join(".config")
                .join("fileman")
                .join("config.xml")
        })
        .ok_or_else(|| anyhow!("no config directory and HOME is not set"))
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn plain_dirs_have_no_symlink_ancestor() {
        let td = tempdir().unwrap();
        let real = dunce::canonicalize(td.path()).unwrap();
        let p = real.join("a").join("b.log");
        assert!(!path_has_symlink_ancestor(&p).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_parent_detected() {
        let td = tempdir().unwrap();
        let real = dunce::canonicalize(td.path()).unwrap();
        let target = real.join("target");
        fs::create_dir_all(&target).unwrap();
        let link = real.join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();
        assert!(path_has_symlink_ancestor(&link.join("x.log")).unwrap());
    }
}
