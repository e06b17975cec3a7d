//! git::interface
//!
//! Git interface implementation using the `git` executable.
//!
//! This module provides the **single doorway** to all Git queries in
//! revisionary. Every query spawns one short-lived `git` process in the
//! working tree, waits for it, and parses its stdout into a typed value.
//!
//! # Error Handling
//!
//! Failures are categorized into typed variants:
//! - [`GitError::Spawn`]: The executable could not be started
//! - [`GitError::CommandFailed`]: The command exited non-zero
//! - [`GitError::InvalidUtf8`]: The command printed non-UTF-8 output
//! - [`GitError::UnexpectedOutput`]: The output did not parse into the expected type
//!
//! # Example
//!
//! ```no_run
//! use revisionary::git::{Repository, VersionControl};
//!
//! let repo = Repository::open(".");
//! let tags = repo.list_tags()?;
//! if let Some(newest) = tags.first() {
//!     println!("{} commits since {}", repo.commits_since(newest)?, newest);
//! }
//! # Ok::<(), revisionary::git::GitError>(())
//! ```

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use thiserror::Error;
use tracing::debug;

use super::traits::VersionControl;
use crate::core::types::ShortId;

/// Errors from Git operations.
///
/// Every variant carries enough context (the command line, the exit code,
/// git's own stderr) to be surfaced to the user verbatim.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git executable could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// The program that was invoked
        program: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The command ran but exited with a non-zero status.
    #[error("`{command}` failed ({}): {stderr}", exit_description(.code))]
    CommandFailed {
        /// The full command line
        command: String,
        /// Exit code, if the process was not killed by a signal
        code: Option<i32>,
        /// Trimmed stderr of the command
        stderr: String,
    },

    /// The command printed output that is not valid UTF-8.
    #[error("`{command}` produced non-UTF-8 output")]
    InvalidUtf8 {
        /// The full command line
        command: String,
    },

    /// The command output could not be parsed into the expected type.
    #[error("unexpected output from `{command}`: {output:?}")]
    UnexpectedOutput {
        /// The full command line
        command: String,
        /// The trimmed stdout that failed to parse
        output: String,
    },
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

/// A Git working tree.
///
/// The handle is an immutable path plus the program used to query it.
/// Nothing is cached: every query re-reads the live repository state.
#[derive(Debug, Clone)]
pub struct Repository {
    path: PathBuf,
    program: String,
}

impl Repository {
    /// Default executable used for queries.
    pub const DEFAULT_PROGRAM: &'static str = "git";

    /// Create a handle for the working tree rooted at `path`.
    ///
    /// Opening never touches the filesystem; a path that is not a
    /// repository is reported by the first query.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_program(path, Self::DEFAULT_PROGRAM)
    }

    /// Create a handle that runs `program` instead of `git`.
    pub fn with_program(path: impl Into<PathBuf>, program: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            program: program.into(),
        }
    }

    /// Path to the working tree.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Executable used for queries.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run `git <args>` in the working tree and return its stdout.
    ///
    /// Fails on spawn errors, non-zero exit and non-UTF-8 output.
    fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let command = self.describe(args);
        debug!(command = %command, cwd = %self.path.display(), "running");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.path)
            .output()
            .map_err(|source| GitError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        Self::check(command, output)
    }

    fn check(command: String, output: Output) -> Result<String, GitError> {
        debug!(command = %command, status = %output.status, "finished");

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| GitError::InvalidUtf8 { command })
    }

    fn describe(&self, args: &[&str]) -> String {
        std::iter::once(self.program.as_str())
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl VersionControl for Repository {
    fn list_tags(&self) -> Result<Vec<String>, GitError> {
        let stdout = self.run(&["tag", "--sort=-version:refname", "--merged"])?;
        Ok(parse_tags(&stdout))
    }

    fn is_dirty(&self) -> Result<bool, GitError> {
        let stdout = self.run(&["status", "--short"])?;
        Ok(!stdout.trim().is_empty())
    }

    fn commits_since(&self, reference: &str) -> Result<u64, GitError> {
        let range = format!("{reference}..HEAD");
        let args = ["rev-list", "--count", range.as_str()];
        let stdout = self.run(&args)?;
        parse_count(&stdout).ok_or_else(|| GitError::UnexpectedOutput {
            command: self.describe(&args),
            output: stdout.trim().to_string(),
        })
    }

    fn current_short_id(&self) -> Result<ShortId, GitError> {
        let args = ["rev-parse", "--short", "HEAD"];
        let stdout = self.run(&args)?;
        ShortId::new(stdout.trim()).map_err(|_| GitError::UnexpectedOutput {
            command: self.describe(&args),
            output: stdout.trim().to_string(),
        })
    }
}

/// Split `git tag` output into tag names, preserving order.
fn parse_tags(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `git rev-list --count` output.
fn parse_count(stdout: &str) -> Option<u64> {
    stdout.trim().parse().ok()
}
