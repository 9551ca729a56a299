//! Orchestration of the initialization run.

use anyhow::{Context, Result};
use std::path::Path;
use std::time::Instant;

use patch_init::actions;
use patch_init::context::{self, PatchContext};
use patch_init::git;
use patch_init::github::GitHub;
use patch_init::guidance;
use patch_init::params;
use patch_init::report::{Fault, Report};
use patch_init::scaffold;

use super::RunOptions;

pub(super) fn execute_run(options: RunOptions) -> Result<i32> {
    let started = Instant::now();
    let mut report = Report::new();
    let mut patch_name = String::new();

    if let Err(error) = initialize(&options, &mut report, &mut patch_name) {
        report.absorb_failure(error);
    }
    let failed = report.has_errors();

    // Outputs and the summary are written on success and failure alike so
    // the workflow can always comment back.
    let errors = report.render_errors();
    let warnings = report.render_warnings();
    let infos = report.render_infos(&patch_name);
    let duration = format!(
        "###### Duration: {:.1} seconds",
        started.elapsed().as_secs_f64()
    );

    actions::set_output("errors", &errors)?;
    actions::set_output("warnings", &warnings)?;
    actions::set_output("infos", &infos)?;
    actions::set_output("duration", &duration)?;
    for block in [&errors, &warnings, &infos] {
        if !block.is_empty() {
            actions::add_summary(block)?;
        }
    }

    if failed {
        println!("\n❌ Initialization failed, see the workflow summary");
        Ok(1)
    } else {
        println!("\n✨ Patch '{patch_name}' initialized successfully!");
        Ok(0)
    }
}

/// The fallible part of the run. Hard faults bubble up; validation problems
/// aggregate in the report, and any error leaves the repository untouched.
fn initialize(options: &RunOptions, report: &mut Report, patch_name: &mut String) -> Result<()> {
    println!("🔧 Initializing patch repository...\n");

    if !options.no_commit {
        git::ensure_git_available()?;
    }

    // A broken template slug is reported but does not stop input
    // validation; the aggregate check below handles it.
    let template_repo = match context::template_repo() {
        Ok(slug) => slug,
        Err(error) => {
            report.absorb_failure(error);
            String::new()
        }
    };

    let github = if options.local {
        None
    } else {
        Some(GitHub::new(resolve_token(options)?)?)
    };
    let patch_context = match &github {
        Some(github) => context::gather(github, &template_repo)?,
        None => local_context()?,
    };
    *patch_name = patch_context.name.clone();
    println!("  ✓ Repository: {}", patch_context.name);

    context::check_patch_name(&patch_context.name, report);
    context::check_patch_description(&patch_context.description, report);

    let blob = actions::resolve_parameters(
        options.parameters.as_deref(),
        options.parameters_file.as_deref(),
    )?;
    let config = params::parse_parameters(&blob, report)?;

    if report.has_errors() {
        return Ok(());
    }
    let Some(config) = config else {
        return Ok(());
    };
    println!("  ✓ Selections validated");

    println!("\n📁 Writing patch skeleton...");
    let root = Path::new(".");
    scaffold::create(
        root,
        &config,
        &patch_context,
        &template_repo,
        &context::template_repo_url(),
    )?;
    scaffold::remove_template_files(root, &config)?;
    println!("  ✓ Created skeleton for '{}'", patch_context.name);

    if !options.no_commit {
        git::setup_identity(&patch_context.username, &patch_context.user_email)?;
        git::commit_initial_state(!options.local)?;
        if options.local {
            println!("  ✓ Committed initial state");
        } else {
            println!("  ✓ Committed initial state and pushed to main");
        }
    }

    if let Some(github) = &github {
        if let Some(topics) = guidance::merged_topics(&config, &patch_context.topics) {
            // Topic updates are cosmetic; a failure must not fail the run.
            match github.replace_topics(&patch_context.repo, &topics) {
                Ok(()) => println!("  ✓ Updated repository topics"),
                Err(error) => eprintln!("Updating repository topics failed: {error}"),
            }
        }
    }

    guidance::list_next_steps(&config, &patch_context, report);
    Ok(())
}

fn resolve_token(options: &RunOptions) -> Result<String> {
    options
        .token
        .clone()
        .or_else(|| actions::input("token"))
        .or_else(|| std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()))
        .ok_or_else(|| {
            Fault::new(
                "GitHub API token not available",
                "The GitHub API token is required to access the repository information. \
                 Please try again later",
            )
            .into()
        })
}

/// Stand-in context for `--local` dry runs outside a workflow.
fn local_context() -> Result<PatchContext> {
    let dir = std::env::current_dir().context("Failed to determine working directory")?;
    let name = dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("patch")
        .to_string();
    let username = std::env::var("USER").unwrap_or_else(|_| "local".to_string());
    Ok(PatchContext {
        name,
        description: String::new(),
        url: String::new(),
        repo: String::new(),
        topics: Vec::new(),
        username_full: username.clone(),
        user_email: format!("{username}@localhost"),
        username,
    })
}
