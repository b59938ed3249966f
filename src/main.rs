//! trash-empty - permanently delete trashed files
//!
//! Usage: trash-empty [--trash-dir PATH] [DAYS]
//!
//! Without arguments every trash directory of the current user is emptied.
//! With DAYS only items trashed more than DAYS days ago are removed.

mod commands;

use std::io::Write;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use trash_empty::presentation::{EmptyCommand, ExitStatus, EX_USAGE};

fn main() -> Result<()> {
    let status = match EmptyCommand::parse_from(std::env::args_os()) {
        EmptyCommand::PrintHelp(help) => {
            print!("{}", help);
            ExitStatus::ok()
        }
        EmptyCommand::PrintVersion(version) => {
            print!("{}", version);
            ExitStatus::ok()
        }
        EmptyCommand::InvalidUsage(message) => {
            let mut stderr = std::io::stderr().lock();
            write!(stderr, "{}", message)?;
            let mut status = ExitStatus::ok();
            status |= EX_USAGE;
            status
        }
        EmptyCommand::Purge {
            trash_dir,
            threshold,
            verbose,
        } => {
            init_tracing(verbose);
            commands::cmd_purge(trash_dir, threshold)?
        }
    };

    std::io::stdout().flush()?;
    if !status.is_success() {
        std::process::exit(status.code());
    }
    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `-v` flags.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("trash_empty={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
