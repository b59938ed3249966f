//! Test environment builder for isolated trash-empty runs.
//!
//! Every run gets its own `HOME`, `XDG_DATA_HOME` and volume list, so the
//! binary never touches the real trash of the user running the tests.

use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use chrono::{Duration, Local, NaiveDateTime};
use tempfile::TempDir;

/// Result of running the trash-empty binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    root: TempDir,
    volumes: Vec<PathBuf>,
    bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn home_dir(&self) -> PathBuf {
        self.path("home")
    }

    /// `$XDG_DATA_HOME/Trash`
    pub fn home_trash(&self) -> PathBuf {
        self.path("xdg-data/Trash")
    }

    pub fn volume(&self, index: usize) -> &Path {
        &self.volumes[index]
    }

    /// Owner of the temp tree, i.e. the uid the binary runs as
    pub fn uid(&self) -> u32 {
        std::fs::metadata(self.root.path())
            .expect("Failed to stat temp root")
            .uid()
    }

    /// Run trash-empty in this environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        let volumes = std::env::join_paths(&self.volumes).expect("Invalid volume path");

        let output = Command::new(&self.bin)
            .args(args)
            .env("HOME", self.home_dir())
            .env("XDG_DATA_HOME", self.path("xdg-data"))
            .env("TRASH_EMPTY_TEST_VOLUMES", volumes)
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute trash-empty");

        output_to_result(output)
    }

    /// Trash `name` into `trash` as if it had been deleted `days_ago` days ago.
    pub fn trash_item(&self, trash: &Path, name: &str, days_ago: i64) {
        let deleted = Local::now().naive_local() - Duration::days(days_ago);
        self.trash_item_at(trash, name, deleted);
    }

    pub fn trash_item_at(&self, trash: &Path, name: &str, deleted: NaiveDateTime) {
        write_file(
            &trash.join("info").join(format!("{name}.trashinfo")),
            &format!(
                "[Trash Info]\nPath=/original/{name}\nDeletionDate={}\n",
                deleted.format("%Y-%m-%dT%H:%M:%S")
            ),
        );
        write_file(&trash.join("files").join(name), "payload");
    }

    /// Write a trashinfo file with arbitrary contents plus its payload.
    pub fn trash_raw(&self, trash: &Path, name: &str, trashinfo: &str) {
        write_file(&trash.join("info").join(format!("{name}.trashinfo")), trashinfo);
        write_file(&trash.join("files").join(name), "payload");
    }

    /// Put a payload into `files/` with no matching trashinfo.
    pub fn orphan(&self, trash: &Path, name: &str) {
        write_file(&trash.join("files").join(name), "orphan");
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    volumes: Vec<String>,
}

impl TestEnvBuilder {
    /// Add a fake volume root named `name`
    pub fn with_volume(mut self, name: &str) -> Self {
        self.volumes.push(name.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir_all(root.path().join("home")).expect("Failed to create home");

        let volumes = self
            .volumes
            .iter()
            .map(|name| {
                let path = root.path().join("volumes").join(name);
                std::fs::create_dir_all(&path).expect("Failed to create volume");
                path
            })
            .collect();

        TestEnv {
            root,
            volumes,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_trash-empty")),
        }
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}
