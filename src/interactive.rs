//! Interactive menu loop.
//!
//! Reads one line per prompt, builds a fresh `Command` per iteration, prints
//! the report or the error text and returns to the menu. Only `q` or end of
//! input ends the loop; failed operations never do.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::command::{Command, MenuChoice, execute, log_failure};
use crate::config::Config;
use crate::types::{DeleteRequest, Target, TransferKind, TransferRequest};

pub const MENU: &str = "What operation do you want to perform? Please choose given following options (like A or a):
    A. List all files
    B. Search file
    C. Copy or move file
    D. Delete file
    Q. Exit";
pub const SOURCE_PATH: &str = "Enter source file path:";
pub const DESTINATION_PATH: &str = "Enter destination file path:";
pub const FILE_NAME: &str = "Enter file name:";
pub const TRANSFER_KIND: &str = "Which operation do you want to perform copy or move:";

/// Prompt, then read one line. `None` on end of input.
fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<Option<String>> {
    writeln!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Collect the arguments for `choice`. `Ok(None)` when input ran out mid-way
/// (or for `Quit`, which takes no arguments).
fn read_command<R: BufRead, W: Write>(
    choice: MenuChoice,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<Result<Command, String>>> {
    macro_rules! ask_or_eof {
        ($prompt:expr) => {
            match ask(input, out, $prompt)? {
                Some(v) => v,
                None => return Ok(None),
            }
        };
    }

    let command = match choice {
        MenuChoice::List => {
            let source = ask_or_eof!(SOURCE_PATH);
            Command::List {
                source: PathBuf::from(source),
            }
        }
        MenuChoice::Search => {
            let source = ask_or_eof!(SOURCE_PATH);
            let file_name = ask_or_eof!(FILE_NAME);
            Command::Search {
                source: PathBuf::from(source),
                file_name,
            }
        }
        MenuChoice::Transfer => {
            let source = ask_or_eof!(SOURCE_PATH);
            let destination = ask_or_eof!(DESTINATION_PATH);
            let file_name = ask_or_eof!(FILE_NAME);
            let kind = ask_or_eof!(TRANSFER_KIND);
            let kind = match TransferKind::parse(&kind) {
                Ok(k) => k,
                Err(e) => return Ok(Some(Err(e.to_string()))),
            };
            Command::Transfer(TransferRequest::new(
                source,
                destination,
                Target::from_name(&file_name),
                kind,
            ))
        }
        MenuChoice::Delete => {
            let source = ask_or_eof!(SOURCE_PATH);
            let file_name = ask_or_eof!(FILE_NAME);
            Command::Delete(DeleteRequest::new(source, Target::from_name(&file_name)))
        }
        MenuChoice::Quit => return Ok(None),
    };
    Ok(Some(Ok(command)))
}

/// Run the menu until `q` or end of input.
pub fn run<R: BufRead, W: Write>(config: &Config, input: &mut R, out: &mut W) -> io::Result<()> {
    loop {
        let Some(answer) = ask(input, out, MENU)? else {
            return Ok(());
        };
        let choice = match MenuChoice::parse(&answer) {
            Some(MenuChoice::Quit) => {
                writeln!(out, "Exiting...")?;
                return Ok(());
            }
            Some(choice) => choice,
            None => {
                writeln!(out, "invalid option")?;
                continue;
            }
        };

        let command = match read_command(choice, input, out)? {
            None => return Ok(()),
            Some(Err(msg)) => {
                writeln!(out, "{msg}")?;
                continue;
            }
            Some(Ok(command)) => command,
        };

        match execute(config, &command) {
            Ok(report) => writeln!(out, "{report}")?,
            Err(e) => {
                log_failure(&command, &e);
                writeln!(out, "{e}")?;
            }
        }
    }
}
