use std::path::Path;
use tracing::debug;

use crate::config::Config;
use crate::errors::Result;
use crate::types::{Outcome, Target, TransferKind, TransferRequest};

use super::dir_transfer::transfer_dir;
use super::file_transfer::{copy_file, move_file};

/// Top-level dispatcher for a transfer request.
/// - `Target::File` copies/moves exactly one file between the two directories.
/// - `Target::Directory` mirrors the whole source tree onto the destination.
pub fn transfer(config: &Config, req: &TransferRequest) -> Result<Outcome> {
    let src: &Path = &req.source;
    let dest: &Path = &req.destination;
    debug!(
        src = %src.display(),
        dest = %dest.display(),
        kind = %req.kind,
        file = req.target.file_name().unwrap_or(""),
        "dispatch transfer"
    );

    match (&req.target, req.kind) {
        (Target::File(name), TransferKind::Copy) => copy_file(src, dest, name),
        (Target::File(name), TransferKind::Move) => move_file(config, src, dest, name),
        (Target::Directory, kind) => transfer_dir(config, src, dest, kind),
    }
}
