use std::path::Path;

use colored::Colorize;
use hb_core::{Character, CreatorConfig};

/// Where `hb demo` saves its sample character unless told otherwise.
pub const DEFAULT_FILE: &str = "aria.txt";

pub fn run(file: &Path, config: &CreatorConfig) -> Result<(), String> {
    println!("{}", "=== CHARACTER CREATOR TEST ===".bold());

    let mut hero = Character::create("Aria", "Mage", config).map_err(super::describe)?;
    println!("{hero}");

    super::save(&hero, file, config)?;
    println!("  {}", format!("Saved to {}", file.display()).dimmed());

    let loaded = super::load(file)?;
    println!();
    println!("Loaded from file:");
    println!("{loaded}");

    let event = hero
        .level_up(config.unknown_class)
        .map_err(|e| e.to_string())?;
    println!("{event}");
    println!("{hero}");

    Ok(())
}
