use std::path::Path;

use colored::Colorize;
use hb_core::CreatorConfig;

pub fn run(file: &Path, times: u32, config: &CreatorConfig) -> Result<(), String> {
    let mut character = super::load(file)?;

    for _ in 0..times {
        let event = character
            .level_up(config.unknown_class)
            .map_err(|e| e.to_string())?;
        println!("{}", event.to_string().green());
        println!("  {}", event.gains().dimmed());
    }

    super::save(&character, file, config)?;
    println!("{character}");

    Ok(())
}
