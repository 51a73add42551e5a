//! Shared test utilities for integration tests.
//!
//! Provides helpers for creating scratch Markdown files and running the
//! compiled binary against them.

#![allow(dead_code)]

use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Sample document with links on every interesting line.
pub const SAMPLE: &str = "# Notes\n\
\n\
See [Rust](https://en.wikipedia.org/wiki/Rust_(programming_language)) here.\n\
A [note] without a link.\n\
Broken [link](https://example.com/oops\n\
Last [one](https://example.com) line.\n";

/// Writes file to directory, creating parent directories as needed.
///
/// # Returns
///
/// Full path of the written file
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(dir: &Path, path: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates temporary directory holding `notes.md` with `content`.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn create_document(content: &str) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = write_file(dir.path(), "notes.md", content)?;
    Ok((dir, path))
}

/// Runs the unlink-md binary with `args`, feeding `stdin` when given.
///
/// # Errors
///
/// Returns error if the process cannot be spawned or awaited
pub fn run_binary(args: &[&str], stdin: Option<&str>) -> Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_unlink-md"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // Dropping the handle closes the pipe so the binary sees end of input
    if let Some(mut pipe) = child.stdin.take() {
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes())?;
        }
    }

    Ok(child.wait_with_output()?)
}
