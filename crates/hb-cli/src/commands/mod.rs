pub mod check;
pub mod classes;
pub mod create;
pub mod demo;
pub mod level_up;
pub mod show;

use std::path::Path;

use hb_core::{Character, CreatorConfig, HbError};

/// Load a character file, turning "not found" into a hint about `create`.
fn load(path: &Path) -> Result<Character, String> {
    hb_core::load_character(path).map_err(|e| match e {
        HbError::NotFound(_) => format!("{e} (create one with `hb create <name> <class>`)"),
        other => other.to_string(),
    })
}

/// Render a core error, pointing at `--help` when the input was at fault.
fn describe(e: HbError) -> String {
    if e.is_validation() {
        format!("{e} (see `hb create --help`)")
    } else {
        e.to_string()
    }
}

fn save(character: &Character, path: &Path, config: &CreatorConfig) -> Result<(), String> {
    hb_core::save_character(character, path, config).map_err(|e| e.to_string())
}
