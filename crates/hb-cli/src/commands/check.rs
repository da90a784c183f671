use std::path::Path;

use colored::Colorize;
use hb_core::{UnknownClassPolicy, validate_character};

pub fn run(file: &Path, policy: UnknownClassPolicy) -> Result<(), String> {
    let character = super::load(file)?;
    let issues = validate_character(&character, policy);

    if issues.is_empty() {
        println!("  {} {} is consistent", "ok".green(), file.display());
        return Ok(());
    }

    for issue in &issues {
        if issue.is_error {
            println!("  {}", issue.to_string().red());
        } else {
            println!("  {}", issue.to_string().yellow());
        }
    }

    let errors = issues.iter().filter(|i| i.is_error).count();
    if errors > 0 {
        Err(format!(
            "{} has {} error{}",
            file.display(),
            errors,
            if errors == 1 { "" } else { "s" }
        ))
    } else {
        Ok(())
    }
}
