//! Command dispatch.
//! A `Command` is a fully-populated request for one operation; `execute`
//! runs it against the filesystem and returns a printable `Report`.
//! Nothing is carried from one command to the next.

use std::fmt;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::{FileOpsError, Result};
use crate::fs_ops::{self, SearchOutcome};
use crate::types::{DeleteRequest, Outcome, TransferRequest};

/// Entries of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Search,
    Transfer,
    Delete,
    Quit,
}

impl MenuChoice {
    /// Single letter, case-insensitive: a, b, c, d or q.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Some(MenuChoice::List),
            "b" => Some(MenuChoice::Search),
            "c" => Some(MenuChoice::Transfer),
            "d" => Some(MenuChoice::Delete),
            "q" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List { source: PathBuf },
    Search { source: PathBuf, file_name: String },
    Transfer(TransferRequest),
    Delete(DeleteRequest),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::List { .. } => "list",
            Command::Search { .. } => "search",
            Command::Transfer(_) => "transfer",
            Command::Delete(_) => "delete",
        }
    }
}

/// What a successful command has to show the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Files(Vec<PathBuf>),
    Search(SearchOutcome),
    Done(Outcome),
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Files(files) => {
                for (i, p) in files.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    write!(f, "{}", p.display())?;
                }
                Ok(())
            }
            Report::Search(outcome) => fmt::Display::fmt(outcome, f),
            Report::Done(outcome) => fmt::Display::fmt(outcome, f),
        }
    }
}

pub fn execute(config: &Config, command: &Command) -> Result<Report> {
    debug!(command = command.name(), "executing");
    match command {
        Command::List { source } => fs_ops::list_files(source).map(Report::Files),
        Command::Search { source, file_name } => {
            fs_ops::search(source, file_name).map(Report::Search)
        }
        Command::Transfer(req) => fs_ops::transfer(config, req).map(Report::Done),
        Command::Delete(req) => fs_ops::delete(req).map(Report::Done),
    }
}

/// Structured log line for a failed command, with an OS hint when one applies.
pub fn log_failure(command: &Command, err: &FileOpsError) {
    let hint = err.io_error().and_then(fs_ops::os_hint).unwrap_or("");
    warn!(
        command = command.name(),
        code = err.code(),
        kind = ?err.kind(),
        hint,
        error = %err,
        "operation failed"
    );
}
