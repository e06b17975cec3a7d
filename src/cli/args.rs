//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! All flags are optional; with none given, the version of the working tree
//! in the current directory is printed.
//! - `--help` / `-h`: Show help
//! - `--version` / `-V`: Show version
//! - `--cwd <path>`: Resolve the working tree at that path (`REVISIONARY_CWD`)
//! - `--git <program>`: Git executable to run (`REVISIONARY_GIT`)
//! - `--json`: Print the version components as JSON
//! - `--debug`: Enable debug logging

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::git::Repository;

/// Revisionary - PEP 440 version strings from git tags
#[derive(Parser, Debug)]
#[command(name = "revisionary")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
OUTPUT FORMAT:
    <tag>                          HEAD is on the newest tag, clean tree
    <tag>.dev<N>+git.<sha>         N commits after the newest tag
    <tag>.dev<N>+git.<sha>.dirty   ... with uncommitted changes

EXAMPLES:
    # Version of the current checkout
    revisionary

    # Stamp a build from another directory
    revisionary --cwd path/to/checkout

    # Machine-readable components
    revisionary --json")]
pub struct Cli {
    /// Resolve the working tree at this path instead of the current directory
    #[arg(long, env = "REVISIONARY_CWD", value_name = "PATH")]
    pub cwd: Option<PathBuf>,

    /// Git executable used for repository queries
    #[arg(
        long,
        env = "REVISIONARY_GIT",
        value_name = "PROGRAM",
        default_value = Repository::DEFAULT_PROGRAM
    )]
    pub git: String,

    /// Print version components as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Working tree to resolve.
    pub fn work_dir(&self) -> &Path {
        self.cwd.as_deref().unwrap_or_else(|| Path::new("."))
    }

    /// Repository handle described by the flags.
    pub fn repository(&self) -> Repository {
        Repository::with_program(self.work_dir(), self.git.clone())
    }
}
