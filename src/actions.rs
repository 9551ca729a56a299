//! GitHub Actions workflow wiring: inputs from the environment, outputs and
//! the step summary through the runner's file commands.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::report::Fault;

/// Action input, as the runner exposes it (`INPUT_<NAME>` uppercased).
pub fn input(name: &str) -> Option<String> {
    let key = format!("INPUT_{}", name.to_uppercase().replace(' ', "_"));
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// The selections blob: `--parameters`, `--parameters-file`, or the
/// `parameters` action input, in that order.
pub fn resolve_parameters(inline: Option<&str>, file: Option<&Path>) -> Result<String> {
    if let Some(blob) = inline {
        return Ok(blob.to_string());
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    input("parameters").ok_or_else(|| {
        Fault::new(
            "Missing input parameters",
            "The input parameters are missing. This should not have happened. Please \
             try again. If the error persists, please report it.",
        )
        .into()
    })
}

/// Set a (possibly multiline) step output via `$GITHUB_OUTPUT`.
///
/// Outside a workflow the file command is absent and the output is dropped.
pub fn set_output(name: &str, value: &str) -> Result<()> {
    let Ok(path) = std::env::var("GITHUB_OUTPUT") else {
        return Ok(());
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open {path}"))?;
    // Heredoc form handles multiline values; the delimiter must not occur
    // in the value itself.
    let mut delimiter = "ghadelimiter".to_string();
    while value.contains(&delimiter) {
        delimiter.push('_');
    }
    writeln!(file, "{name}<<{delimiter}\n{value}\n{delimiter}")
        .context("Failed to write step output")
}

/// Append markdown to the workflow step summary via `$GITHUB_STEP_SUMMARY`.
pub fn add_summary(markdown: &str) -> Result<()> {
    let Ok(path) = std::env::var("GITHUB_STEP_SUMMARY") else {
        return Ok(());
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open {path}"))?;
    writeln!(file, "{markdown}").context("Failed to write step summary")
}
