//! Validate a selections blob without touching the repository.
//!
//! Useful while editing the setup issue form or debugging a failed
//! initialization: prints every diagnostic and the derived configuration.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use patch_init::actions;
use patch_init::params;
use patch_init::report::Report;

pub fn execute(parameters: Option<String>, parameters_file: Option<PathBuf>) -> Result<i32> {
    let blob = actions::resolve_parameters(parameters.as_deref(), parameters_file.as_deref())?;

    let mut report = Report::new();
    let config = params::parse_parameters(&blob, &mut report)?;

    for warning in &report.warnings {
        println!(
            "{} {}\n  {}",
            "⚠".yellow().bold(),
            warning.summary.bold(),
            warning.details.dimmed()
        );
    }
    for error in &report.errors {
        println!(
            "{} {}\n  {}",
            "✗".red().bold(),
            error.summary.bold(),
            error.details.dimmed()
        );
    }

    match config {
        Some(config) => {
            println!("{} Selections are valid\n", "✓".green().bold());
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(0)
        }
        None => {
            println!(
                "\n{} invalid selection(s)",
                report.errors.len().to_string().red().bold()
            );
            Ok(1)
        }
    }
}
