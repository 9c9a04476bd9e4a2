//! Shared integration-test helpers for running the `pagesmith` binary and
//! locating fixtures.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Absolute path of a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Runs the `pagesmith` binary with `args` and waits for it to exit.
#[allow(clippy::missing_panics_doc)]
pub fn run_pagesmith(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pagesmith"))
        .args(args)
        .env_remove("PAGESMITH_CONFIG")
        .env_remove("PAGESMITH_FALLBACK")
        .env_remove("PAGESMITH_LOG_LEVEL")
        .output()
        .expect("failed to run pagesmith")
}

/// Stdout of a finished process as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a finished process as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
