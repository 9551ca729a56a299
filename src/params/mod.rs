//! Validation and normalization of the setup-form selections.
//!
//! The selections arrive as a loosely-typed JSON blob keyed by the
//! human-readable field labels of the setup issue form. Parsing runs in
//! three strictly ordered phases:
//!
//! 1. shape phase: per-field type checks, collecting every shape error
//! 2. refinement phase: cross-field rules, collecting every semantic error
//!    (only entered when the shape phase was clean)
//! 3. derivation phase: pure computation of the convenience flags
//!
//! The result is either a fully-typed [`PatchConfig`] or a non-empty set of
//! path-addressed errors in the report, never both.

mod rules;
mod schema;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::games::GameSet;
use crate::report::{Fault, Report};

/// Normalized configuration derived from the user's selections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchConfig {
    pub content: GameSet,
    pub menu: GameSet,
    pub pfx: GameSet,
    pub vfx: GameSet,
    pub sfx: GameSet,
    pub music: GameSet,
    pub camera: GameSet,
    pub fight: GameSet,
    pub ou: GameSet,
    pub anim: GameSet,
    pub ikarus: bool,
    pub lego: bool,
    pub init_content: bool,
    pub init_menu: bool,
    pub needs_content_scripts: bool,
    pub needs_scripts: bool,
    pub needs_ninja: bool,
    pub needs_init: bool,
    pub versions: GameSet,
}

/// Field values after the shape phase, before cross-field rules.
#[derive(Debug, Clone)]
pub(crate) struct RawSelection {
    pub content: GameSet,
    pub menu: GameSet,
    pub pfx: GameSet,
    pub vfx: GameSet,
    pub sfx: GameSet,
    pub music: GameSet,
    pub camera: GameSet,
    pub fight: GameSet,
    pub ou: GameSet,
    pub anim: GameSet,
    pub ikarus: bool,
    pub lego: bool,
    pub init_content: bool,
    pub init_menu: bool,
}

/// Parse the selections blob.
///
/// Returns `Ok(Some(config))` on success, `Ok(None)` when shape or semantic
/// errors were collected into the report, and `Err` only for hard faults
/// (blob is not a JSON object at all).
pub fn parse_parameters(blob: &str, report: &mut Report) -> Result<Option<PatchConfig>> {
    let json: Value = serde_json::from_str(blob).map_err(|_| {
        Fault::new(
            "Invalid input parameters",
            "The input parameters could not be parsed as JSON. This should not have \
             happened. Please try again. If the error persists, please report it.",
        )
    })?;

    let root = json.as_object().ok_or_else(|| {
        Fault::new(
            "Invalid input parameters",
            "The input parameters are not a JSON object. This should not have happened. \
             Please try again. If the error persists, please report it.",
        )
    })?;

    let Some(raw) = schema::collect(root, report) else {
        return Ok(None);
    };

    Ok(rules::refine_and_derive(raw, report))
}
