//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - Without a subcommand the interactive menu runs.
//! - --debug is a shorthand for --log-level debug.
//! - An omitted or empty NAME targets the whole directory.

use clap::{Parser, Subcommand, ValueHint};
use std::path::{Path, PathBuf};

use crate::command::Command;
use crate::config::types::{Config, LogLevel};
use crate::errors::FileOpsError;
use crate::types::{DeleteRequest, Target, TransferKind, TransferRequest};

/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "List, search, copy, move and delete files (interactive when no command is given)"
)]
pub struct Args {
    #[command(subcommand)]
    pub op: Option<Op>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        global = true,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, global = true, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Append logs to this file in addition to stderr.
    #[arg(long, global = true, value_hint = ValueHint::FilePath, help = "Also write logs to this file")]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, global = true, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Never try a rename when moving; always copy then remove.
    #[arg(
        long,
        global = true,
        help = "Always copy then remove when moving (skip the same-volume rename)"
    )]
    pub no_rename: bool,

    /// Print where fileman will look for the config file, then exit.
    #[arg(long, help = "Print the config file location used by fileman and exit")]
    pub print_config: bool,

    /// Write a template config file at the config location, then exit.
    #[arg(long, help = "Write a template config file and exit")]
    pub init_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// List every file under DIR, recursively
    List {
        #[arg(value_hint = ValueHint::DirPath)]
        dir: PathBuf,
    },
    /// Report whether a file named NAME exists anywhere under DIR
    Search {
        #[arg(value_hint = ValueHint::DirPath)]
        dir: PathBuf,
        name: String,
    },
    /// Copy NAME (or the whole SOURCE directory) into DESTINATION
    Copy {
        #[arg(value_hint = ValueHint::DirPath)]
        source: PathBuf,
        #[arg(value_hint = ValueHint::DirPath)]
        destination: PathBuf,
        name: Option<String>,
    },
    /// Move NAME (or the whole SOURCE directory) into DESTINATION
    Move {
        #[arg(value_hint = ValueHint::DirPath)]
        source: PathBuf,
        #[arg(value_hint = ValueHint::DirPath)]
        destination: PathBuf,
        name: Option<String>,
    },
    /// Copy or move, with the operation given as a word ("copy" or "move")
    Transfer {
        #[arg(value_hint = ValueHint::DirPath)]
        source: PathBuf,
        #[arg(value_hint = ValueHint::DirPath)]
        destination: PathBuf,
        operation: String,
        name: Option<String>,
    },
    /// Delete NAME inside PATH, or PATH itself with everything beneath it
    Delete {
        #[arg(value_hint = ValueHint::AnyPath)]
        path: PathBuf,
        name: Option<String>,
    },
}

impl Op {
    /// Build the request this subcommand stands for.
    pub fn to_command(&self) -> Result<Command, FileOpsError> {
        fn transfer(
            source: &Path,
            destination: &Path,
            name: &Option<String>,
            kind: TransferKind,
        ) -> Command {
            Command::Transfer(TransferRequest::new(
                sanitize_path(source),
                sanitize_path(destination),
                Target::from(name.clone()),
                kind,
            ))
        }

        Ok(match self {
            Op::List { dir } => Command::List {
                source: sanitize_path(dir),
            },
            Op::Search { dir, name } => Command::Search {
                source: sanitize_path(dir),
                file_name: name.clone(),
            },
            Op::Copy {
                source,
                destination,
                name,
            } => transfer(source, destination, name, TransferKind::Copy),
            Op::Move {
                source,
                destination,
                name,
            } => transfer(source, destination, name, TransferKind::Move),
            Op::Transfer {
                source,
                destination,
                operation,
                name,
            } => transfer(source, destination, name, TransferKind::parse(operation)?),
            Op::Delete { path, name } => Command::Delete(DeleteRequest::new(
                sanitize_path(path),
                Target::from(name.clone()),
            )),
        })
    }
}

/// Trim surrounding single/double quotes left behind by PowerShell or CMD.
fn sanitize_path(p: &Path) -> PathBuf {
    let s = p.to_string_lossy();
    let trimmed = s.trim();
    if trimmed.len() >= 2
        && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
            || (trimmed.starts_with('\'') && trimmed.ends_with('\'')))
    {
        return PathBuf::from(&trimmed[1..trimmed.len() - 1]);
    }
    if trimmed.len() == s.len() {
        // untouched; keep non-UTF-8 paths intact
        return p.to_path_buf();
    }
    PathBuf::from(trimmed)
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
        if self.no_rename {
            cfg.prefer_rename = false;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
