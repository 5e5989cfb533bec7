//! Test support utilities for shopsync integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

use std::process::Output;

use assert_cmd::Command;
use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// No process-global state is mutated — child processes use
/// `.current_dir()` and a scrubbed environment so tests can safely run in
/// parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with a `.shopsync.toml` in place.
    pub fn with_config(toml: &str) -> Self {
        let t = Self::new();
        std::fs::write(t.dir.path().join(".shopsync.toml"), toml)
            .expect("failed to write config file");
        t
    }

    /// Create a shopsync command with a scrubbed environment.
    ///
    /// Removes every SHOPSYNC_* variable so the host environment cannot
    /// leak into tests, and disables color for stable assertions.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("shopsync").expect("failed to find shopsync binary");
        cmd.current_dir(self.dir.path());
        cmd.env("NO_COLOR", "1");
        for var in [
            "SHOPSYNC_PROJECT_ID",
            "SHOPSYNC_ENV",
            "SHOPSYNC_STORE",
            "SHOPSYNC_LOG",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Shortcut for `shopsync run` (placeholder backend).
    pub fn run(&self) -> Output {
        self.cmd()
            .arg("run")
            .output()
            .expect("failed to run shopsync run")
    }

    /// Shortcut for `shopsync --verbose run`.
    pub fn run_verbose(&self) -> Output {
        self.cmd()
            .args(["--verbose", "run"])
            .output()
            .expect("failed to run shopsync run")
    }

    /// Shortcut for `shopsync status`.
    pub fn status(&self) -> Output {
        self.cmd()
            .arg("status")
            .output()
            .expect("failed to run shopsync status")
    }

    /// Shortcut for `shopsync redact`.
    pub fn redact(&self, value: &str) -> Output {
        self.cmd()
            .args(["redact", value])
            .output()
            .expect("failed to run shopsync redact")
    }
}

/// Assert that a command output was successful.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("Command failed:\n{}", stderr);
    }
}

/// Assert that a command output failed.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "Expected command to fail but it succeeded"
    );
}

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Combined stdout + stderr, for whole-diagnostic assertions.
pub fn all_output(output: &Output) -> String {
    format!("{}{}", stdout(output), stderr(output))
}

/// Assert stdout contains a string.
pub fn assert_stdout_contains(output: &Output, expected: &str) {
    let out = stdout(output);
    assert!(
        out.contains(expected),
        "stdout missing '{}', got: {}",
        expected,
        out
    );
}

/// Assert stderr contains a string.
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(
        err.contains(expected),
        "stderr missing '{}', got: {}",
        expected,
        err
    );
}

/// Assert that no emitted diagnostic contains a string.
pub fn assert_output_excludes(output: &Output, excluded: &str) {
    let all = all_output(output);
    assert!(
        !all.contains(excluded),
        "output should not contain '{}', got: {}",
        excluded,
        all
    );
}
