//! Purge command handler
//!
//! Empties the trash directories of the current user, or a single trash
//! directory when `--trash-dir` was given.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use trash_empty::application::{PurgeOptions, PurgeUseCase};
use trash_empty::config::TrashEnvironment;
use trash_empty::domain::policies::DeletionPolicy;
use trash_empty::domain::value_objects::AgeThreshold;
use trash_empty::infrastructure::LocalFs;
use trash_empty::presentation::output::render_removal_failure;
use trash_empty::presentation::ExitStatus;

/// Execute the purge command
pub fn cmd_purge(trash_dir: Option<PathBuf>, threshold: Option<AgeThreshold>) -> Result<ExitStatus> {
    // The cutoff is fixed once so every entry is judged against the same instant
    let now = chrono::Local::now().naive_local();
    let options = PurgeOptions::new()
        .with_trash_dir(trash_dir)
        .with_policy(DeletionPolicy::from_threshold(threshold, now));

    let env = TrashEnvironment::from_env(options.target.scans_volumes());
    let report = PurgeUseCase::new(LocalFs::new()).execute(&env, &options);

    let mut stderr = std::io::stderr().lock();
    for failure in &report.failures {
        writeln!(stderr, "{}", render_removal_failure(failure))?;
    }

    info!(
        trash_dirs = report.trash_dirs.len(),
        deleted = report.total_deleted(),
        retained = report.retained.len(),
        failures = report.failures.len(),
        "purge finished"
    );

    // Removal failures are reported but do not change the exit status
    Ok(ExitStatus::ok())
}
