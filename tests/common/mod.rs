//! Shared testing utilities for cvtailor CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        Self { root: TempDir::new().expect("Failed to create temp directory for tests") }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Write a file into the working directory and return its absolute path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Build a command for invoking the compiled `cvtailor` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("cvtailor").expect("cvtailor binary should be built");
        cmd.current_dir(self.root.path());
        cmd
    }
}
