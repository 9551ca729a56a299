//! Refinement and derivation phases.
//!
//! Refinements enforce the cross-field rules and run only on a clean shape
//! pass. The LeGo dependency is auto-corrected with a warning; everything
//! else is an error. Derivation is pure and cannot fail.

use crate::report::Report;

use super::{PatchConfig, RawSelection};

pub(crate) fn refine_and_derive(raw: RawSelection, report: &mut Report) -> Option<PatchConfig> {
    let mut raw = raw;

    // LeGo pulls in Ikarus; the corrected value feeds the rules below.
    if raw.lego && !raw.ikarus {
        report.warning(
            "LeGo is enabled without Ikarus",
            "LeGo requires Ikarus. Adding Ikarus to selection",
        );
        raw.ikarus = true;
    }

    let before = report.errors.len();
    let no_content = raw.content.is_empty();
    if raw.init_content && no_content {
        report.error(
            "Invalid input Content initialization",
            "Cannot use initialization without using content scripts",
        );
    }
    if raw.init_menu && no_content {
        report.error(
            "Invalid input Menu initialization",
            "Cannot use initialization without using content scripts",
        );
    }
    if raw.ikarus && no_content {
        report.error(
            "Invalid input Ikarus and LeGo->Ikarus",
            "Cannot use Ikarus without using content scripts",
        );
    }
    if report.errors.len() > before {
        return None;
    }

    let needs_content_scripts = !raw.content.is_empty();
    let script_sets = [
        &raw.content,
        &raw.menu,
        &raw.pfx,
        &raw.vfx,
        &raw.sfx,
        &raw.music,
        &raw.camera,
        &raw.fight,
    ];
    let needs_scripts = script_sets.iter().any(|set| !set.is_empty());
    let needs_ninja = needs_scripts || !raw.ou.is_empty() || !raw.anim.is_empty();
    let needs_init = raw.init_content || raw.init_menu;
    let versions = [
        &raw.content,
        &raw.menu,
        &raw.pfx,
        &raw.vfx,
        &raw.sfx,
        &raw.music,
        &raw.camera,
        &raw.fight,
        &raw.ou,
        &raw.anim,
    ]
    .into_iter()
    .fold(crate::games::GameSet::empty(), |acc, set| acc.union(set));

    Some(PatchConfig {
        content: raw.content,
        menu: raw.menu,
        pfx: raw.pfx,
        vfx: raw.vfx,
        sfx: raw.sfx,
        music: raw.music,
        camera: raw.camera,
        fight: raw.fight,
        ou: raw.ou,
        anim: raw.anim,
        ikarus: raw.ikarus,
        lego: raw.lego,
        init_content: raw.init_content,
        init_menu: raw.init_menu,
        needs_content_scripts,
        needs_scripts,
        needs_ninja,
        needs_init,
        versions,
    })
}
