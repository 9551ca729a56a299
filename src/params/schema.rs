//! Shape phase: per-field type checks and truthy coercion.
//!
//! Every problem is reported against its `->`-joined field path so the
//! workflow comment can point at the exact form field. Nothing here stops at
//! the first error.

use serde_json::{Map, Value};

use crate::games::{Game, GameSet};
use crate::report::Report;

/// Top-level fields holding a per-game switch group, in [`RawSelection`]
/// field order.
const GAME_SWITCH_FIELDS: [&str; 10] = [
    "Content scripts",
    "Menu scripts",
    "Particle FX scripts",
    "Visual FX scripts",
    "Sound FX scripts",
    "Music scripts",
    "Camera scripts",
    "Fight AI scripts",
    "Output units",
    "Animations",
];

use super::RawSelection;

/// Walk the raw object and collect every shape error. Returns `None` when
/// anything was reported.
pub(crate) fn collect(root: &Map<String, Value>, report: &mut Report) -> Option<RawSelection> {
    let before = report.errors.len();

    let mut switches = [GameSet::empty(); 10];
    for (field, slot) in GAME_SWITCH_FIELDS.iter().zip(switches.iter_mut()) {
        if let Some(set) = game_switch(root, field, report) {
            *slot = set;
        }
    }
    let [content, menu, pfx, vfx, sfx, music, camera, fight, ou, anim] = switches;

    let (ikarus, lego) = framework_toggles(root, report);
    let init_content = wrapped_toggle(
        root,
        "Content initialization",
        "Content initialization function",
        report,
    );
    let init_menu = wrapped_toggle(
        root,
        "Menu initialization",
        "Menu initialization function",
        report,
    );

    if report.errors.len() > before {
        return None;
    }

    Some(RawSelection {
        content,
        menu,
        pfx,
        vfx,
        sfx,
        music,
        camera,
        fight,
        ou,
        anim,
        ikarus: ikarus.unwrap_or(false),
        lego: lego.unwrap_or(false),
        init_content: init_content.unwrap_or(false),
        init_menu: init_menu.unwrap_or(false),
    })
}

/// One per-game switch group: an object with all four game labels, each a
/// truthy value. Selected games land in the set in canonical order.
fn game_switch(root: &Map<String, Value>, field: &str, report: &mut Report) -> Option<GameSet> {
    let obj = required_object(root, field, report)?;
    let mut set = GameSet::empty();
    let mut complete = true;
    for game in Game::ALL {
        let path = [field, game.label()];
        match obj.get(game.label()) {
            Some(value) => match truthy(value, &path, report) {
                Some(true) => set.insert(game),
                Some(false) => {}
                None => complete = false,
            },
            None => {
                shape_error(&path, "Required", report);
                complete = false;
            }
        }
    }
    complete.then_some(set)
}

/// The `Ikarus and LeGo` group. Both toggles are independent here; their
/// dependency is a refinement-phase concern.
fn framework_toggles(
    root: &Map<String, Value>,
    report: &mut Report,
) -> (Option<bool>, Option<bool>) {
    let field = "Ikarus and LeGo";
    let Some(obj) = required_object(root, field, report) else {
        return (None, None);
    };
    let mut toggle = |key: &str| -> Option<bool> {
        let path = [field, key];
        match obj.get(key) {
            Some(value) => truthy(value, &path, report),
            None => {
                shape_error(&path, "Required", report);
                None
            }
        }
    };
    (toggle("Ikarus"), toggle("LeGo"))
}

/// A single toggle nested inside its own object, as the issue form submits
/// checkbox groups with one entry.
fn wrapped_toggle(
    root: &Map<String, Value>,
    field: &str,
    key: &str,
    report: &mut Report,
) -> Option<bool> {
    let obj = required_object(root, field, report)?;
    let path = [field, key];
    match obj.get(key) {
        Some(value) => truthy(value, &path, report),
        None => {
            shape_error(&path, "Required", report);
            None
        }
    }
}

fn required_object<'a>(
    root: &'a Map<String, Value>,
    field: &str,
    report: &mut Report,
) -> Option<&'a Map<String, Value>> {
    match root.get(field) {
        Some(Value::Object(obj)) => Some(obj),
        Some(_) => {
            shape_error(&[field], "Expected an object", report);
            None
        }
        None => {
            shape_error(&[field], "Required", report);
            None
        }
    }
}

/// Coerce `true`/`false` given as booleans or strings.
fn truthy(value: &Value, path: &[&str], report: &mut Report) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s == "true" => Some(true),
        Value::String(s) if s == "false" => Some(false),
        _ => {
            shape_error(path, "Expected `true` or `false`", report);
            None
        }
    }
}

fn shape_error(path: &[&str], message: &str, report: &mut Report) {
    report.error(format!("Invalid input {}", path.join("->")), message);
}
