use std::path::{Path, PathBuf};

use colored::Colorize;
use hb_core::{Character, CreatorConfig};

pub fn run(
    name: &str,
    class: &str,
    output: Option<&Path>,
    config: &CreatorConfig,
) -> Result<(), String> {
    let character = Character::create(name, class, config).map_err(super::describe)?;

    let target = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_file(name));

    super::save(&character, &target, config)?;

    println!("{character}");
    println!(
        "  Created {} the {} in {}",
        character.name.bold(),
        character.class,
        target.display()
    );

    Ok(())
}

/// `Aria Windrunner` → `aria_windrunner.txt`
fn default_file(name: &str) -> PathBuf {
    let stem: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    PathBuf::from(format!("{stem}.txt"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_from_name() {
        assert_eq!(default_file("Aria"), PathBuf::from("aria.txt"));
        assert_eq!(
            default_file("Aria Windrunner"),
            PathBuf::from("aria_windrunner.txt")
        );
        assert_eq!(default_file("../x"), PathBuf::from("___x.txt"));
    }
}
