use comfy_table::{ContentArrangement, Table};
use hb_core::CharacterClass;

pub fn run(level: u32) -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Class".to_string(),
        "Strength".to_string(),
        "Magic".to_string(),
        "Health".to_string(),
        format!("Level {level}"),
    ]);

    for class in &CharacterClass::BUILT_IN {
        let Some(formula) = class.formula() else {
            continue;
        };
        let at = formula.at(level);
        table.add_row(vec![
            class.to_string(),
            formula.strength.to_string(),
            formula.magic.to_string(),
            formula.health.to_string(),
            format!("{}/{}/{}", at.strength, at.magic, at.health),
        ]);
    }

    println!("{table}");
    println!();
    println!("  L = level. Stats shown as strength/magic/health.");

    Ok(())
}
