use std::process::ExitCode;

use fileman::output as out;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = fileman::cli::parse();
    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            out::print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
