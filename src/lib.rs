//! Core library for `fileman`.
//!
//! Recursive listing, name search, copy/move of a file or a whole tree, and
//! delete of a file or a whole tree, over the local filesystem. Every
//! operation takes its full context as arguments and returns either an
//! [`Outcome`]/[`Report`] whose `Display` is the user-facing text, or a
//! [`FileOpsError`]. Nothing in the core exits the process.

pub mod cli;
pub mod command;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod interactive;
pub mod output;
pub mod platform;
pub mod types;
mod utils;

pub use command::{Command, MenuChoice, Report, execute};
pub use config::{Config, LogLevel, default_config_path, path_has_symlink_ancestor};
pub use errors::{ErrorKind, FileOpsError};
pub use fs_ops::{
    SearchOutcome, copy_file, delete, list_files, move_file, search, transfer, transfer_dir,
};
pub use types::{DeleteRequest, Outcome, Target, TransferKind, TransferRequest};
