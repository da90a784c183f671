use std::path::Path;

pub fn run(file: &Path, json: bool) -> Result<(), String> {
    let character = super::load(file)?;

    if json {
        let out = serde_json::to_string_pretty(&character)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{out}");
    } else {
        println!("{character}");
    }

    Ok(())
}
