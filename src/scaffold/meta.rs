//! Repository metadata files: dotfiles, README, LICENSE, and the cleanup of
//! template-only files.

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::write_file;
use crate::context::PatchContext;
use crate::games::Game;
use crate::params::PatchConfig;

/// Where the template ships the initializer and its license texts.
const INIT_DIR: &str = ".github/init";

const VALIDATOR_YML: &str = "# This file is required for the patch-validator to work and may contain advanced configuration options
# For more information, visit https://github.com/szapp/patch-validator/#configuration

prefix:
ignore-declaration:
ignore-resource:
";

const GITIGNORE: &str = "*.vdf
";

const GITATTRIBUTES: &str = r"# Checkout line endings based on OS (do not force crlf where not necessary)
* text=auto

# Checkout Windows-style line endings and ensure correct encoding
# Encoding is not localization but fixed zSTRING::Upper code page handling!
# See https://forum.worldofplayers.de/forum/threads/1537187/page3
# and https://forum.worldofplayers.de/forum/threads/759496
*.[dD] text working-tree-encoding=CP1252 eol=crlf
*.[cC][sS][lL] text working-tree-encoding=CP1252 linguist-detectable=false

# Exclude (semi-) binary resources from linguist stats

# Output units
*.[bB][iI][nN] binary linguist-detectable=false

# Animation files
*.[aA][sS][cC] text linguist-detectable=false
*.[mM][dD][sS] text linguist-detectable=false
*.[mM][aA][nN] binary linguist-detectable=false
*.[mM][dD][hH] binary linguist-detectable=false
*.[mM][dD][lL] binary linguist-detectable=false
*.[mM][dD][mM] binary linguist-detectable=false
*.[mM][mM][bB] binary linguist-detectable=false
*.[mM][sS][bB] binary linguist-detectable=false
*.[sS][sS][cC] binary linguist-detectable=false

# Graphic files
*.[tT][gG][aA] binary linguist-detectable=false
*.[tT][eE][xX] binary linguist-detectable=false
*.[fF][nN][tT] binary linguist-detectable=false

# Mesh files (ZEN might be ASCII or binary)
*.3[dD][sS]    binary linguist-detectable=false
*.[mM][rR][mM] binary linguist-detectable=false
*.[mM][sS][hH] binary linguist-detectable=false
*.[zZ][eE][nN] text=auto linguist-detectable=false

# Music files
*.[dD][lL][sS] binary linguist-detectable=false
*.[sS][tT][yY] binary linguist-detectable=false
*.[sS][gG][tT] binary linguist-detectable=false

# Sound files
*.[wW][aA][vV] binary linguist-detectable=false
*.[oO][gG][gG] binary linguist-detectable=false
*.[mM][pP]3    binary linguist-detectable=false

# Video files
*.[bB][iI][kK] binary linguist-detectable=false

# VDF in case committed (mixed binary and text)
*.[vV][dD][fF] binary linguist-detectable=false
";

const DEPENDABOT_YML: &str = r#"# This file is keeps the GitHub Actions up-to-date
# For more information, visit https://docs.github.com/en/code-security/dependabot
version: 2
updates:
- package-ecosystem: "github-actions"
  directory: "/"
  schedule:
    interval: "weekly"
"#;

const RELEASE_YML: &str = "# This file excludes bot authors from the automatically generated release notes
# For more information, visit https://docs.github.com/en/repositories/releasing-projects-on-github/automatically-generated-release-notes#configuring-automatically-generated-release-notes

changelog:
  exclude:
    authors:
      - dependabot
      - github-actions
";

const TOOL_CFG: &str = "; This file adds dependencies for Spine
; For more information, visit https://clockwork-origins.com/spine-tutorial-tool-cfg/

[DEPENDENCIES]
Required=314
";

pub(crate) fn write_dotfiles(root: &Path, config: &PatchConfig) -> Result<()> {
    write_file(root, ".validator.yml", VALIDATOR_YML)?;
    write_file(root, ".gitignore", GITIGNORE)?;
    write_file(root, ".gitattributes", GITATTRIBUTES)?;
    write_file(root, ".github/dependabot.yml", DEPENDABOT_YML)?;
    write_file(root, ".github/release.yml", RELEASE_YML)?;
    if config.needs_ninja {
        write_file(root, "tool.cfg", TOOL_CFG)?;
    }
    Ok(())
}

/// Game name as shown in the README.
fn readme_label(game: Game) -> &'static str {
    match game {
        Game::Gothic1 => "Gothic 1",
        Game::GothicSequel => "Gothic Sequel",
        Game::Gothic2Classic => "Gothic II (Classic)",
        Game::Gothic2Notr => "Gothic II: NotR",
    }
}

pub(crate) fn write_readme(
    root: &Path,
    config: &PatchConfig,
    context: &PatchContext,
    template_repo: &str,
    template_repo_url: &str,
) -> Result<()> {
    let mut badge = String::new();
    if config.needs_scripts {
        badge.push_str(&format!(
            "\n[![Scripts]({0}/actions/workflows/scripts.yml/badge.svg)]({0}/actions/workflows/scripts.yml)",
            context.url
        ));
    }
    if config.needs_ninja {
        badge.push_str(&format!(
            "\n[![Validation]({0}/actions/workflows/validation.yml/badge.svg)]({0}/actions/workflows/validation.yml)",
            context.url
        ));
    }
    badge.push_str(&format!(
        "\n[![Build]({0}/actions/workflows/build.yml/badge.svg)]({0}/actions/workflows/build.yml)",
        context.url
    ));
    badge.push_str(&format!(
        "\n[![GitHub release](https://img.shields.io/github/v/release/{}.svg)]({}/releases/latest)",
        context.repo, context.url
    ));

    let mut compatible = String::new();
    if !config.versions.is_empty() {
        compatible.push_str("It supports ");
        let games: Vec<String> = config
            .versions
            .iter()
            .map(|g| format!("<kbd>{}</kbd>", readme_label(g)))
            .collect();
        if games.len() > 1 {
            compatible.push_str(&games[..games.len() - 1].join(", "));
            compatible.push_str(" and ");
            compatible.push_str(&games[games.len() - 1]);
        } else {
            compatible.push_str(&games[0]);
            compatible.push_str(" only");
        }
        compatible.push('.');
    }

    let mut requirements = String::new();
    if config.needs_ninja {
        requirements.push_str("### Requirements\n\n<table><thead><tr>");
        for game in config.versions.iter() {
            let header = match game {
                Game::Gothic1 => "Gothic",
                game => readme_label(game),
            };
            requirements.push_str(&format!("<th>{header}</th>"));
        }
        requirements.push_str("</tr></thead>\n<tbody><tr>");
        for game in config.versions.iter() {
            requirements.push_str(match game {
                Game::Gothic1 => {
                    "<td><a href=\"https://www.worldofgothic.de/dl/download_34.htm\">Version 1.08k_mod</a></td>"
                }
                Game::GothicSequel => "<td>Version 1.12f</td>",
                Game::Gothic2Classic => {
                    "<td><a href=\"https://www.worldofgothic.de/dl/download_278.htm\">Report version 1.30.0.0</a></td>"
                }
                Game::Gothic2Notr => {
                    "<td><a href=\"https://www.worldofgothic.de/dl/download_278.htm\">Report version 2.6.0.0</a></td>"
                }
            });
        }
        requirements.push_str(&format!(
            "</tr></tbody>\n<tbody><tr><td colspan=\"{}\" align=\"center\">\
             <a href=\"https://github.com/szapp/Ninja\">Ninja 2.8</a> or higher</td></tr></tbody></table>",
            config.versions.len()
        ));
    }

    let workshop_g1 = if config.versions.contains(Game::Gothic1) {
        "- [Steam Workshop Gothic 1](https://steamcommunity.com/sharedfiles/filedetails/?id=XXXXXXXXXX)\n"
    } else {
        ""
    };
    let workshop_g2 = if config.versions.contains(Game::Gothic2Notr) {
        "- [Steam Workshop Gothic 2](https://steamcommunity.com/sharedfiles/filedetails/?id=XXXXXXXXXX)\n"
    } else {
        ""
    };

    let content = format!(
        r"# {name}
{badge}

{description}

This is a modular modification (a.k.a. patch or add-on) that can be installed and uninstalled at any time and is virtually compatible with any modification.
{compatible}

<sup>Generated from [{template_repo}]({template_repo_url}).</sup>

## Installation

1. Download the latest release of `{name}.vdf` from the [releases page]({url}/releases/latest).

2. Copy the file `{name}.vdf` to `[Gothic]\Data\`. To uninstall, remove the file again.

<!--
The patch is also available on
- [World of Gothic](https://www.worldofgothic.de/dl/download_XXXX.htm) | [Forum thread](https://forum.worldofplayers.de/forum/threads/XXXXXXX)
- [Spine Mod-Manager](https://clockwork-origins.com/spine/)
{workshop_g1}{workshop_g2}-->

{requirements}

<!--

If you are interested in writing your own patch, please do not copy this patch!
Instead refer to the PATCH TEMPLATE to build a foundation that is customized to your needs!
The patch template can found at {template_repo_url}.

-->
",
        name = context.name,
        badge = badge,
        description = context.description,
        compatible = compatible,
        template_repo = template_repo,
        template_repo_url = template_repo_url,
        url = context.url,
        workshop_g1 = workshop_g1,
        workshop_g2 = workshop_g2,
        requirements = requirements,
    );

    write_file(root, "README.md", &content)
}

/// Assemble LICENSE from the license texts shipped with the template,
/// filling in the year and rights holder.
pub(crate) fn write_license(root: &Path, context: &PatchContext) -> Result<()> {
    let licenses_dir = root.join(INIT_DIR).join("licenses");
    let license_g1 = fs::read_to_string(licenses_dir.join("GOTHIC_MOD_Development_Kit.txt"))
        .context("Failed to read Gothic 1 license text")?;
    let license_g2 = fs::read_to_string(licenses_dir.join("GothicMOD-Lizenz.txt"))
        .context("Failed to read Gothic 2 license text")?;

    let holder = format!("{} {}", Utc::now().year(), context.username_full);
    let licenses = format!(
        "{}\n\n{}",
        license_g2.replace(
            "20[jj] [Inhaber der ausschlie\u{00df}lichen Nutzungsrechte]",
            &holder
        ),
        license_g1
    );

    write_file(root, "LICENSE", &licenses)
}

/// Remove the template-only files the generated repository must not keep.
pub fn remove_template_files(root: &Path, config: &PatchConfig) -> Result<()> {
    let mut doomed = vec![
        ".github/workflows/init.yml",
        ".github/ISSUE_TEMPLATE",
        ".github/FUNDING.yml",
        INIT_DIR,
    ];
    if !config.needs_scripts {
        doomed.push(".github/workflows/scripts.yml");
    }
    for relative in doomed {
        remove_path(&root.join(relative))?;
    }
    Ok(())
}

fn remove_path(path: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(()),
        Err(error) => {
            return Err(error).with_context(|| format!("Failed to inspect {}", path.display()))
        }
    };
    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    result.with_context(|| format!("Failed to remove {}", path.display()))
}
