//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap and folds every possible
//! parse outcome into the closed `EmptyCommand` enum, so `main` handles help,
//! version, usage errors and the actual purge with one exhaustive match.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};

use crate::domain::value_objects::AgeThreshold;

/// Purge trashed files.
#[derive(Parser, Debug)]
#[command(name = "trash-empty")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only purge items trashed more than DAYS days ago
    #[arg(value_name = "DAYS", conflicts_with = "trash_dirs")]
    pub days: Option<AgeThreshold>,

    /// Purge only this trash directory (the first occurrence wins)
    #[arg(long = "trash-dir", value_name = "PATH", action = ArgAction::Append)]
    pub trash_dirs: Vec<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Everything a command line can ask for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyCommand {
    /// Print rendered help to stdout
    PrintHelp(String),
    /// Print rendered version to stdout
    PrintVersion(String),
    /// Report a usage error to stderr
    InvalidUsage(String),
    /// Purge the trash
    Purge {
        trash_dir: Option<PathBuf>,
        threshold: Option<AgeThreshold>,
        verbose: u8,
    },
}

impl EmptyCommand {
    /// Parse a full argument vector (program name first).
    pub fn parse_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Cli::try_parse_from(args) {
            Ok(cli) => cli.into(),
            Err(err) => {
                let rendered = err.render().to_string();
                match err.kind() {
                    ErrorKind::DisplayHelp
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                        EmptyCommand::PrintHelp(rendered)
                    }
                    ErrorKind::DisplayVersion => EmptyCommand::PrintVersion(rendered),
                    _ => EmptyCommand::InvalidUsage(rendered),
                }
            }
        }
    }
}

impl From<Cli> for EmptyCommand {
    fn from(cli: Cli) -> Self {
        EmptyCommand::Purge {
            trash_dir: cli.trash_dirs.into_iter().next(),
            threshold: cli.days,
            verbose: cli.verbose,
        }
    }
}
