//! Test support utilities for credgate integration tests.
//!
//! Provides isolated test environments and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated working directory.
///
/// Child processes start from an empty environment and run inside `dir`,
/// so the only settings they see are the ones a test writes to `.env`.
pub struct Test {
    /// Working directory for the child process
    pub dir: TempDir,
}

impl Test {
    /// Create a test environment with no `.env` file.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment whose `.env` holds `pairs`.
    pub fn with_env(pairs: &[(&str, &str)]) -> Self {
        let t = Self::new();
        t.write_env(".env", pairs);
        t
    }

    /// Write a dotenv file into the test directory and return its path.
    pub fn write_env(&self, name: &str, pairs: &[(&str, &str)]) -> PathBuf {
        let contents: String = pairs
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"\n", k, v))
            .collect();
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("failed to write env file");
        path
    }
}
