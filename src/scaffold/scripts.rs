//! Daedalus source files: content SRC files, the initialization script, and
//! the per-category SRC files.

use anyhow::Result;
use std::path::Path;

use super::write_file;
use crate::context::PatchContext;
use crate::games::GameSet;
use crate::params::PatchConfig;

/// One `Content_G<code>.src` per selected content game.
pub(crate) fn write_content_src_files(
    root: &Path,
    config: &PatchConfig,
    context: &PatchContext,
) -> Result<()> {
    if !config.needs_content_scripts {
        return Ok(());
    }
    let mut content = String::new();
    if config.ikarus {
        content.push_str("Ikarus\n");
        if config.lego {
            content.push_str("LeGo\n");
        }
    }
    content.push_str("\n// LIST YOUR FILES HERE");
    if config.needs_init {
        content.push_str("\n\nContent\\init.d");
    }
    // Trailing newline is important for parsing
    content.push('\n');

    for code in config.content.codes() {
        write_file(
            root,
            &format!("Ninja/{}/Content_G{}.src", context.name, code),
            &content,
        )?;
    }
    Ok(())
}

/// `Content/init.d` holding the menu and/or content initialization
/// functions Ninja calls into.
pub(crate) fn write_initialization(
    root: &Path,
    config: &PatchConfig,
    context: &PatchContext,
) -> Result<()> {
    if !config.needs_init {
        return Ok(());
    }
    let mem_init = if config.ikarus {
        "\n    MEM_InitAll();"
    } else {
        ""
    };
    let merge_lego = if config.lego {
        "\n    LeGo_MergeFlags( /* DESIRED LEGO PACKAGES */ );"
    } else {
        mem_init
    };

    let mut content = String::new();
    if config.init_menu {
        content.push_str(&format!(
            r#"/*
 * Menu initialization function called by Ninja every time a menu is opened
 */
func void Ninja_{}_Menu(var int menuPtr) {{{}

    // WRITE YOUR INITIALIZATIONS HERE

}};
"#,
            context.name, mem_init
        ));
        if config.init_content {
            content.push('\n');
        }
    }
    if config.init_content {
        content.push_str(&format!(
            r#"/*
 * Initialization function called by Ninja after "Init_Global" (G2) / "Init_<Levelname>" (G1)
 */
func void Ninja_{}_Init() {{{}

    // WRITE YOUR INITIALIZATIONS HERE

}};
"#,
            context.name, merge_lego
        ));
    }

    write_file(
        root,
        &format!("Ninja/{}/Content/init.d", context.name),
        &content,
    )
}

/// Categories with their file-name prefixes, in generation order.
const CATEGORY_PREFIXES: [&str; 7] = ["Menu", "Pfx", "Vfx", "Sfx", "Music", "Fight", "Camera"];

/// Non-content SRC files. A category selected for all four games gets a
/// single suffix-free file, otherwise one file per game.
pub(crate) fn write_src_files(
    root: &Path,
    config: &PatchConfig,
    context: &PatchContext,
) -> Result<()> {
    if !config.needs_scripts {
        return Ok(());
    }
    let sets: [&GameSet; 7] = [
        &config.menu,
        &config.pfx,
        &config.vfx,
        &config.sfx,
        &config.music,
        &config.fight,
        &config.camera,
    ];
    for (prefix, set) in CATEGORY_PREFIXES.iter().zip(sets) {
        if set.is_full() {
            write_file(root, &format!("Ninja/{}/{}.src", context.name, prefix), "\n")?;
        } else {
            for code in set.codes() {
                write_file(
                    root,
                    &format!("Ninja/{}/{}_G{}.src", context.name, prefix, code),
                    "\n",
                )?;
            }
        }
    }
    Ok(())
}
