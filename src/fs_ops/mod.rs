//! Filesystem operations: modularized.

mod atomic;
mod delete;
mod dir_transfer;
mod entry;
mod file_transfer;
mod helpers;
mod io_copy;
mod search;
mod walk;

pub use delete::{delete, delete_directory, delete_file};
pub use dir_transfer::transfer_dir;
pub use entry::transfer;
pub use file_transfer::{copy_file, move_file};
pub use helpers::os_hint;
pub use search::{SearchOutcome, list_files, search};
pub use walk::{TreeWalk, WalkEntry, walk};
