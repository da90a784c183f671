//! The line-oriented character file format.
//!
//! A saved character is seven `Label: value` lines in a fixed order.
//! Parsing is lenient about everything except numbers: lines without a
//! `": "` separator and unrecognized labels are skipped, missing fields
//! fall back to defaults, but a numeric field that does not parse fails
//! the whole load.

use crate::character::Character;
use crate::class::CharacterClass;
use crate::error::{HbError, HbResult};

/// Name used when a file has no `Character Name` line.
pub const DEFAULT_NAME: &str = "Unknown";
/// Class used when a file has no `Class` line.
pub const DEFAULT_CLASS: &str = "Unknown";

/// Field labels in file order.
pub const LABELS: [&str; 7] = [
    "Character Name",
    "Class",
    "Level",
    "Strength",
    "Magic",
    "Health",
    "Gold",
];

impl Character {
    /// Serialize to the seven-line file format, newline-terminated.
    pub fn to_sheet_text(&self) -> String {
        let values = [
            self.name.clone(),
            self.class.to_string(),
            self.level.to_string(),
            self.strength.to_string(),
            self.magic.to_string(),
            self.health.to_string(),
            self.gold.to_string(),
        ];
        LABELS
            .iter()
            .zip(values)
            .map(|(label, value)| format!("{label}: {value}\n"))
            .collect()
    }
}

/// Fields read from a character file, each absent until a line supplies it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialCharacter {
    /// `Character Name` line.
    pub name: Option<String>,
    /// `Class` line.
    pub class: Option<String>,
    /// `Level` line.
    pub level: Option<u32>,
    /// `Strength` line.
    pub strength: Option<u32>,
    /// `Magic` line.
    pub magic: Option<u32>,
    /// `Health` line.
    pub health: Option<u32>,
    /// `Gold` line.
    pub gold: Option<i64>,
}

impl PartialCharacter {
    /// Fill missing fields with defaults.
    pub fn into_character(self) -> Character {
        Character {
            name: self.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            class: CharacterClass::parse(self.class.as_deref().unwrap_or(DEFAULT_CLASS)),
            level: self.level.unwrap_or(1),
            strength: self.strength.unwrap_or(0),
            magic: self.magic.unwrap_or(0),
            health: self.health.unwrap_or(0),
            gold: self.gold.unwrap_or(0),
        }
    }
}

/// Normalize a label to a field key: lower-case, spaces become underscores.
pub fn field_key(label: &str) -> String {
    label.trim().to_lowercase().replace(' ', "_")
}

/// Parse file text into its fields without applying defaults.
pub fn parse_fields(text: &str) -> HbResult<PartialCharacter> {
    let mut fields = PartialCharacter::default();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let Some((label, value)) = raw.trim().split_once(": ") else {
            continue;
        };

        let number = |field: &str| -> HbResult<i64> {
            value.trim().parse::<i64>().map_err(|_| HbError::MalformedField {
                field: field.to_string(),
                value: value.to_string(),
                line: line_no,
            })
        };
        let stat = |field: &str| -> HbResult<u32> {
            let n = number(field)?;
            u32::try_from(n).map_err(|_| HbError::MalformedField {
                field: field.to_string(),
                value: value.to_string(),
                line: line_no,
            })
        };

        match field_key(label).as_str() {
            "character_name" => fields.name = Some(value.to_string()),
            "class" => fields.class = Some(value.to_string()),
            "level" => {
                let level = stat("level")?;
                if level == 0 {
                    return Err(HbError::MalformedField {
                        field: "level".to_string(),
                        value: value.to_string(),
                        line: line_no,
                    });
                }
                fields.level = Some(level);
            }
            "strength" => fields.strength = Some(stat("strength")?),
            "magic" => fields.magic = Some(stat("magic")?),
            "health" => fields.health = Some(stat("health")?),
            "gold" => fields.gold = Some(number("gold")?),
            _ => {}
        }
    }

    Ok(fields)
}

/// Parse file text into a character, filling defaults for missing fields.
pub fn parse_sheet(text: &str) -> HbResult<Character> {
    parse_fields(text).map(PartialCharacter::into_character)
}
