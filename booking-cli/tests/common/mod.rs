//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the booking data directory (not created until first use)
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("booking-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// A command with only the booking binary.
    ///
    /// `BOOKING_*` variables inherited from the caller are cleared so the
    /// test controls every input.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("booking").expect("Failed to find booking binary");
        for var in [
            "BOOKING_DATA_DIR",
            "BOOKING_BUSY_TIMEOUT",
            "BOOKING_BUSY_TIMEOUT_MS",
            "BOOKING_DISABLE_AUTOINIT",
            "BOOKING_OUTPUT_FORMAT",
            "BOOKING_LOG_MODE",
            "BOOKING_HOST",
            "BOOKING_PORT",
            "PORT",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// A command with `--data-dir` pointing at this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Run a command that prints a single id and return it.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn run_for_id(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run booking");

        assert!(
            output.status.success(),
            "{args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .to_string()
    }

    /// Add a customer and return its id.
    pub fn add_customer(&self, name: &str) -> String {
        self.run_for_id(&["customer", "add", name])
    }

    /// Add a restaurant and return its id.
    pub fn add_restaurant(&self, name: &str) -> String {
        self.run_for_id(&["restaurant", "add", name])
    }

    /// Book a party and return the reservation id.
    pub fn reserve(&self, customer: &str, restaurant: &str, party: u32, date: &str) -> String {
        let party = party.to_string();
        self.run_for_id(&[
            "reserve",
            "--customer",
            customer,
            "--restaurant",
            restaurant,
            "--party-count",
            &party,
            "--date",
            date,
        ])
    }

    /// List reservations in the given format and return stdout.
    pub fn list(&self, format: &str) -> String {
        let output = self
            .command()
            .args(["list", "--format", format])
            .output()
            .expect("Failed to run list command");

        assert!(
            output.status.success(),
            "List failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
