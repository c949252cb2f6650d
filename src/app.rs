//! Application orchestrator.
//! Loads/merges config, initializes logging, then runs either one subcommand
//! or the interactive menu.

use anyhow::{Context, Result};
use std::io;
use tracing::debug;

use fileman::cli::{Args, Op};
use fileman::command::{execute, log_failure};
use fileman::config::{create_template_config, load_config};
use fileman::output as out;
use fileman::{Config, default_config_path, interactive};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Config housekeeping flags run before logging init
    if args.print_config {
        let p = default_config_path()?;
        out::print_info(&format!("fileman config path:\n  {}\n", p.display()));
        if p.exists() {
            out::print_info("A config file exists at that location.");
        } else {
            out::print_info("No config file exists there yet. Run with --init-config to create a template.");
        }
        return Ok(());
    }
    if args.init_config {
        let p = default_config_path()?;
        create_template_config(&p)?;
        out::print_success(&format!("A template fileman config was written to: {}", p.display()));
        return Ok(());
    }

    // Defaults < XML < CLI flags
    let mut cfg = load_config()?;
    args.apply_overrides(&mut cfg);

    // Held until return so the file appender flushes
    let _guard = init_tracing(cfg.log_level, cfg.log_file.as_deref(), args.json)
        .context("initialize logging")?;

    debug!(?args, ?cfg, "starting fileman");

    match &args.op {
        Some(op) => run_one(&cfg, op),
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout().lock();
            interactive::run(&cfg, &mut input, &mut output).context("interactive session")
        }
    }
}

/// Execute one subcommand; the result goes to stdout, a failure becomes the exit error.
fn run_one(cfg: &Config, op: &Op) -> Result<()> {
    let command = op.to_command()?;
    match execute(cfg, &command) {
        Ok(report) => {
            let text = report.to_string();
            if !text.is_empty() {
                out::print_user(&text);
            }
            Ok(())
        }
        Err(e) => {
            log_failure(&command, &e);
            Err(e.into())
        }
    }
}
