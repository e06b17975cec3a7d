//! Shared fixtures for integration tests.
//!
//! Repositories are real git repositories in a `TempDir`, built by running
//! the `git` executable directly.

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use revisionary::git::Repository;

/// A commit to create, optionally tagged.
#[derive(Debug, Clone, Copy)]
pub struct Commit {
    pub message: &'static str,
    pub tag: Option<&'static str>,
}

impl Commit {
    /// An untagged commit.
    pub fn plain() -> Self {
        Self {
            message: "good commit message",
            tag: None,
        }
    }

    /// A commit carrying a lightweight tag.
    pub fn tagged(tag: &'static str) -> Self {
        Self {
            message: "good commit message",
            tag: Some(tag),
        }
    }
}

/// Test fixture that creates an empty git repository.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new repository with no commits.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        run_git(dir.path(), &["init"]);
        run_git(dir.path(), &["config", "user.email", "test@example.com"]);
        run_git(dir.path(), &["config", "user.name", "Test User"]);
        run_git(dir.path(), &["config", "commit.gpgsign", "false"]);
        run_git(dir.path(), &["config", "tag.gpgsign", "false"]);

        Self { dir }
    }

    /// Create a repository and apply `commits` in order.
    pub fn with_commits(commits: &[Commit]) -> Self {
        let repo = Self::new();
        repo.commits(commits);
        repo
    }

    /// Get the path to the repository.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Open the accessor for this repository.
    pub fn repository(&self) -> Repository {
        Repository::open(self.path())
    }

    /// Create an empty commit, tagging it if requested.
    pub fn commit(&self, commit: Commit) {
        run_git(
            self.path(),
            &["commit", "--allow-empty", "-m", commit.message],
        );
        if let Some(tag) = commit.tag {
            self.tag(tag);
        }
    }

    /// Create commits in order.
    pub fn commits(&self, commits: &[Commit]) {
        for commit in commits {
            self.commit(*commit);
        }
    }

    /// Tag HEAD.
    pub fn tag(&self, name: &str) {
        run_git(self.path(), &["tag", name]);
    }

    /// Create an untracked file.
    pub fn touch(&self, name: &str) {
        std::fs::write(self.path().join(name), "").expect("failed to write file");
    }

    /// Get the abbreviated HEAD id using git directly.
    pub fn short_head_raw(&self) -> String {
        let output = Command::new("git")
            .args(["rev-parse", "--short", "HEAD"])
            .current_dir(self.path())
            .output()
            .expect("git rev-parse failed");
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    }
}

/// Run a git command in the given directory.
pub fn run_git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git command failed");

    if !output.status.success() {
        panic!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
}
