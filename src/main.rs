use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::run::RunOptions;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Repository initialization for Gothic patch projects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the patch repository from the setup-form selections
    Run {
        /// Selections blob as JSON
        #[arg(long, conflicts_with = "parameters_file")]
        parameters: Option<String>,

        /// Read the selections blob from a file
        #[arg(long)]
        parameters_file: Option<PathBuf>,

        /// GitHub token (defaults to GITHUB_TOKEN)
        #[arg(long)]
        token: Option<String>,

        /// Local-only mode (skip GitHub API access and pushing)
        #[arg(long)]
        local: bool,

        /// Write the skeleton but do not commit
        #[arg(long)]
        no_commit: bool,
    },

    /// Validate a selections blob without touching the repository
    Check {
        /// Selections blob as JSON
        #[arg(long, conflicts_with = "parameters_file")]
        parameters: Option<String>,

        /// Read the selections blob from a file
        #[arg(long)]
        parameters_file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Run {
            parameters,
            parameters_file,
            token,
            local,
            no_commit,
        } => commands::run::execute(RunOptions {
            parameters,
            parameters_file,
            token,
            local,
            no_commit,
        })?,
        Commands::Check {
            parameters,
            parameters_file,
        } => commands::check::execute(parameters, parameters_file)?,
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
