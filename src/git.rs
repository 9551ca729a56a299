//! Git operations for the initial-state commit.
//!
//! The generated skeleton replaces the template history entirely: the commit
//! goes on an orphan branch which is then force-pushed onto the default
//! branch.

use anyhow::{bail, Context, Result};
use std::process::Command;

/// Check that a git binary is on PATH before touching the repository.
pub fn ensure_git_available() -> Result<()> {
    which::which("git").context("git binary not found on PATH")?;
    Ok(())
}

/// Set the commit identity to the triggering user.
pub fn setup_identity(username: &str, email: &str) -> Result<()> {
    run(&["config", "user.name", username])?;
    run(&["config", "user.email", email])?;
    Ok(())
}

/// Commit the working tree as the repository's new initial state and
/// force-push it onto `main`.
pub fn commit_initial_state(push: bool) -> Result<()> {
    run(&["checkout", "--orphan", "init"])?;
    run(&["add", "."])?;
    run(&["commit", "-m", "Initialize patch"])?;
    if push {
        run(&["push", "origin", "init:main", "-f"])?;
    }
    Ok(())
}

fn run(args: &[&str]) -> Result<()> {
    let output = Command::new("git")
        .args(args)
        .output()
        .with_context(|| format!("Failed to run git {}", args.join(" ")))?;

    if !output.status.success() {
        bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(())
}
