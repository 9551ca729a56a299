//! Initialize the patch repository from the setup-form selections.
//!
//! This is the workhorse behind the template's initialization workflow:
//! validate everything, write the patch skeleton, replace the template
//! history with a fresh initial commit, and report back through the step
//! summary.
//!
//! Validation problems are aggregated so the user gets every complaint in
//! one workflow comment instead of one per attempt.

mod internal;

use anyhow::Result;
use std::path::PathBuf;

/// Options for the `run` command, straight from the CLI.
#[derive(Debug, Default)]
pub struct RunOptions {
    /// Selections blob passed inline.
    pub parameters: Option<String>,
    /// Selections blob read from a file.
    pub parameters_file: Option<PathBuf>,
    /// GitHub token; falls back to `GITHUB_TOKEN` or the `token` input.
    pub token: Option<String>,
    /// Skip GitHub API access, topic updates, and pushing.
    pub local: bool,
    /// Write the skeleton but leave git untouched.
    pub no_commit: bool,
}

/// Execute the initialization. Returns the process exit code; failures are
/// reported through the step summary rather than bubbling up.
pub fn execute(options: RunOptions) -> Result<i32> {
    internal::execute_run(options)
}
