//! Skeleton of the generated patch repository.
//!
//! Directory layout first, then the generated files: Daedalus sources,
//! placeholder assets, the VDFS build script, dotfiles, README and LICENSE.
//! Everything is written relative to a repository root so the writers can be
//! exercised against a temporary directory.

mod assets;
mod meta;
mod scripts;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::context::PatchContext;
use crate::params::PatchConfig;

pub use meta::remove_template_files;

/// Resource directories every patch gets, each with an `.empty` marker so
/// git keeps them.
const RESOURCE_DIRS: [&str; 7] = [
    "_work/Data/Anims/_compiled",
    "_work/Data/Meshes/_compiled",
    "_work/Data/Presets",
    "_work/Data/Sound/SFX",
    "_work/Data/Sound/Speech",
    "_work/Data/Textures/_compiled",
    "_work/Data/Worlds",
];

/// Create the directory skeleton and write all generated files.
pub fn create(
    root: &Path,
    config: &PatchConfig,
    context: &PatchContext,
    template_repo: &str,
    template_repo_url: &str,
) -> Result<()> {
    create_dirs(root, config, &context.name)?;
    scripts::write_content_src_files(root, config, context)?;
    scripts::write_initialization(root, config, context)?;
    scripts::write_src_files(root, config, context)?;
    assets::write_ou_files(root, config, context)?;
    assets::write_anim_files(root, config, context)?;
    assets::write_vm_script(root, context)?;
    meta::write_dotfiles(root, config)?;
    meta::write_readme(root, config, context, template_repo, template_repo_url)?;
    meta::write_license(root, context)?;
    Ok(())
}

fn create_dirs(root: &Path, config: &PatchConfig, name: &str) -> Result<()> {
    for dir in RESOURCE_DIRS {
        write_file(root, &format!("{dir}/.empty"), "")?;
    }

    // The Ninja directory exists in the leanest shape that still holds
    // everything the selection needs.
    let ninja = format!("Ninja/{name}");
    if config.needs_init {
        fs::create_dir_all(root.join(&ninja).join("Content"))
            .context("Failed to create Content directory")?;
    } else if config.needs_content_scripts {
        write_file(root, &format!("{ninja}/Content/.empty"), "")?;
    } else if config.needs_ninja {
        fs::create_dir_all(root.join(&ninja)).context("Failed to create Ninja directory")?;
    }
    Ok(())
}

/// Write a file relative to the repository root, creating parent
/// directories as needed.
pub(crate) fn write_file(root: &Path, relative: &str, content: &str) -> Result<()> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(&path, content).with_context(|| format!("Failed to write {relative}"))
}
