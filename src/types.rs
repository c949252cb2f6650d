//! Request and result types shared by the core operations and the CLI layer.
//! - Target says whether a request names one file or a whole directory.
//! - TransferKind selects copy vs move.
//! - Outcome carries the user-facing success text.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::errors::FileOpsError;

/// What a transfer or delete request points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// The whole directory given as the source/path.
    Directory,
    /// Exactly one file inside that directory.
    File(String),
}

impl Target {
    /// Empty (or whitespace-only) input means "the whole directory".
    pub fn from_name(name: &str) -> Self {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            Target::Directory
        } else {
            Target::File(trimmed.to_string())
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        match self {
            Target::Directory => None,
            Target::File(name) => Some(name),
        }
    }
}

impl From<Option<String>> for Target {
    fn from(name: Option<String>) -> Self {
        name.as_deref().map(Target::from_name).unwrap_or(Target::Directory)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    Copy,
    Move,
}

impl TransferKind {
    /// Parse "copy"/"move" (case-insensitive, surrounding whitespace ignored).
    pub fn parse(s: &str) -> Result<Self, FileOpsError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "copy" => Ok(TransferKind::Copy),
            "move" => Ok(TransferKind::Move),
            _ => Err(FileOpsError::InvalidOperation(s.trim().to_string())),
        }
    }
}

impl FromStr for TransferKind {
    type Err = FileOpsError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransferKind::Copy => "copy",
            TransferKind::Move => "move",
        })
    }
}

/// Copy or move a file (or a whole directory) into `destination`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub target: Target,
    pub kind: TransferKind,
}

impl TransferRequest {
    pub fn new(
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        target: Target,
        kind: TransferKind,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            target,
            kind,
        }
    }
}

/// Delete one file inside `path`, or `path` itself with everything beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub path: PathBuf,
    pub target: Target,
}

impl DeleteRequest {
    pub fn new(path: impl Into<PathBuf>, target: Target) -> Self {
        Self {
            path: path.into(),
            target,
        }
    }
}

/// Successful result of a mutating operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    FileCopied,
    FileMoved,
    DirectoryCopied,
    DirectoryMoved,
    FileDeleted,
    DirectoryDeleted,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::FileCopied => "File copied successfully!",
            Outcome::FileMoved => "File moved successfully!",
            Outcome::DirectoryCopied => "Directory copied successfully",
            Outcome::DirectoryMoved => "Directory moved successfully",
            Outcome::FileDeleted => "File deleted successfully",
            Outcome::DirectoryDeleted => "Directory deleted successfully",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_targets_directory() {
        assert_eq!(Target::from_name(""), Target::Directory);
        assert_eq!(Target::from_name("   "), Target::Directory);
        assert_eq!(Target::from_name(" a.txt "), Target::File("a.txt".into()));
        assert_eq!(Target::from(None), Target::Directory);
        assert_eq!(Target::from(Some(String::new())), Target::Directory);
    }

    #[test]
    fn transfer_kind_parsing() {
        assert_eq!("copy".parse::<TransferKind>().unwrap(), TransferKind::Copy);
        assert_eq!(TransferKind::parse(" MOVE ").unwrap(), TransferKind::Move);
        let err = TransferKind::parse("d").unwrap_err();
        assert_eq!(err.to_string(), "invalid operation d");
    }
}
