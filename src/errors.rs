//! Typed error definitions for fileman.
//! Provides a small set of well-known failure modes for better logs and tests.
//!
//! OS-level failures keep the original `io::Error` as their source; the
//! message is the failed operation, the path it was applied to, and the OS
//! text, untranslated.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Broad classification of a [`FileOpsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Target path or file does not exist or is not readable.
    NotFound,
    /// Source file could not be opened for reading.
    OpenFailure,
    /// Request was malformed (unknown keyword, destination inside source).
    InvalidOperation,
    /// Lower-level filesystem failure surfaced as-is.
    OsPropagated,
}

#[derive(Debug, Error)]
pub enum FileOpsError {
    #[error("directory does not exist")]
    DirectoryDoesNotExist,

    #[error("file is not present in the given directory")]
    FileNotPresent,

    #[error("directory not found")]
    DirectoryNotFound,

    #[error("failed to open {file} file in given directory {}", dir.display())]
    OpenFailed { file: String, dir: PathBuf },

    #[error("invalid operation {0}")]
    InvalidOperation(String),

    #[error("destination {} is inside source directory {}", dest.display(), source_dir.display())]
    InvalidDestination { source_dir: PathBuf, dest: PathBuf },

    #[error("source and destination are the same file {}", .0.display())]
    SameFile(PathBuf),

    #[error("{op} {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

impl FileOpsError {
    /// Wrap an OS error with the operation and path that produced it.
    pub fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        FileOpsError::Io {
            op,
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            FileOpsError::DirectoryDoesNotExist
            | FileOpsError::FileNotPresent
            | FileOpsError::DirectoryNotFound => ErrorKind::NotFound,
            FileOpsError::OpenFailed { .. } => ErrorKind::OpenFailure,
            FileOpsError::InvalidOperation(_)
            | FileOpsError::InvalidDestination { .. }
            | FileOpsError::SameFile(_) => ErrorKind::InvalidOperation,
            FileOpsError::Io { .. } | FileOpsError::Walk(_) => ErrorKind::OsPropagated,
        }
    }

    /// Stable short identifier, used as a structured log field.
    pub fn code(&self) -> &'static str {
        match self {
            FileOpsError::DirectoryDoesNotExist => "directory_does_not_exist",
            FileOpsError::FileNotPresent => "file_not_present",
            FileOpsError::DirectoryNotFound => "directory_not_found",
            FileOpsError::OpenFailed { .. } => "open_failed",
            FileOpsError::InvalidOperation(_) => "invalid_operation",
            FileOpsError::InvalidDestination { .. } => "invalid_destination",
            FileOpsError::SameFile(_) => "same_file",
            FileOpsError::Io { .. } => "io",
            FileOpsError::Walk(_) => "walk",
        }
    }

    /// The underlying OS error, when there is one.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            FileOpsError::Io { source, .. } => Some(source),
            FileOpsError::Walk(e) => e.io_error(),
            _ => None,
        }
    }
}

pub type Result<T, E = FileOpsError> = std::result::Result<T, E>;
