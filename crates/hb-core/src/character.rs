//! The character record, its factory, and level progression.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::class::CharacterClass;
use crate::config::{CreatorConfig, UnknownClassPolicy};
use crate::error::{HbError, HbResult};
use crate::stats::{Stats, calculate_stats};

/// A player character.
///
/// Strength, magic, and health are derived from class and level. The
/// factory and [`Character::level_up`] keep them in sync; a record loaded
/// from disk carries whatever values the file held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Display name.
    pub name: String,
    /// Character class.
    pub class: CharacterClass,
    /// Current level, starting at 1.
    pub level: u32,
    /// Physical power.
    pub strength: u32,
    /// Spellcasting power.
    pub magic: u32,
    /// Hit points.
    pub health: u32,
    /// Coin purse.
    pub gold: i64,
}

impl Character {
    /// Create a level 1 character.
    ///
    /// Fails if `name` is empty, has leading or trailing whitespace, or
    /// contains control characters (it must survive the one-line file
    /// format), or if `class` is not one of the four built-in classes
    /// (case-insensitive). The unknown-class policy does not apply here:
    /// new characters always need a real class.
    pub fn create(name: &str, class: &str, config: &CreatorConfig) -> HbResult<Self> {
        if name.is_empty() {
            tracing::warn!("rejected character with empty name");
            return Err(HbError::EmptyName);
        }
        if name.trim() != name || name.chars().any(char::is_control) {
            tracing::warn!(?name, "rejected character with unstorable name");
            return Err(HbError::InvalidName(name.to_string()));
        }

        let class = CharacterClass::parse(class);
        if !class.is_known() {
            tracing::warn!(%class, "rejected character with unknown class");
            return Err(HbError::UnknownClass(class.to_string()));
        }

        let level = 1;
        let stats = calculate_stats(&class, level, UnknownClassPolicy::Reject)?;

        tracing::debug!(name, %class, "created character");

        Ok(Self {
            name: name.to_string(),
            class,
            level,
            strength: stats.strength,
            magic: stats.magic,
            health: stats.health,
            gold: config.starting_gold,
        })
    }

    /// The derived stats currently stored on the record.
    pub fn stats(&self) -> Stats {
        Stats {
            strength: self.strength,
            magic: self.magic,
            health: self.health,
        }
    }

    fn set_stats(&mut self, stats: Stats) {
        self.strength = stats.strength;
        self.magic = stats.magic;
        self.health = stats.health;
    }

    /// Raise the level by one and recompute stats for the new level.
    ///
    /// Name and gold are untouched. The record is left unchanged when the
    /// level is already `u32::MAX`, or when the class is custom under
    /// [`UnknownClassPolicy::Reject`].
    pub fn level_up(&mut self, policy: UnknownClassPolicy) -> HbResult<LevelUp> {
        let level = self
            .level
            .checked_add(1)
            .ok_or_else(|| HbError::LevelOverflow {
                name: self.name.clone(),
                level: self.level,
            })?;
        let stats = calculate_stats(&self.class, level, policy)?;
        let previous = self.stats();

        self.level = level;
        self.set_stats(stats);

        let event = LevelUp {
            name: self.name.clone(),
            level,
            previous,
            current: stats,
        };
        tracing::info!("{event}");
        Ok(event)
    }
}

/// Create a level 1 character with the default configuration.
pub fn create_character(name: &str, class: &str) -> HbResult<Character> {
    Character::create(name, class, &CreatorConfig::default())
}

/// Outcome of a level-up, displayed as the confirmation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUp {
    /// Name of the character.
    pub name: String,
    /// The level just reached.
    pub level: u32,
    /// Stats before the level-up.
    pub previous: Stats,
    /// Stats after the level-up.
    pub current: Stats,
}

impl LevelUp {
    /// Before and after values of each stat, e.g. `strength 5 -> 6, ...`.
    pub fn gains(&self) -> String {
        format!(
            "strength {} -> {}, magic {} -> {}, health {} -> {}",
            self.previous.strength,
            self.current.strength,
            self.previous.magic,
            self.current.magic,
            self.previous.health,
            self.current.health,
        )
    }
}

impl fmt::Display for LevelUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} leveled up to level {}!", self.name, self.level)
    }
}

/// Top border of a rendered character sheet.
pub const SHEET_HEADER: &str = "=== CHARACTER SHEET ===";
/// Bottom border of a rendered character sheet.
pub const SHEET_FOOTER: &str = "========================";

/// Renders the bordered character sheet, one field per line.
impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SHEET_HEADER}")?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Class: {}", self.class)?;
        writeln!(f, "Level: {}", self.level)?;
        writeln!(f, "Strength: {}", self.strength)?;
        writeln!(f, "Magic: {}", self.magic)?;
        writeln!(f, "Health: {}", self.health)?;
        writeln!(f, "Gold: {}", self.gold)?;
        write!(f, "{SHEET_FOOTER}")
    }
}

/// Print the character sheet to stdout.
pub fn display_character(character: &Character) {
    println!("{character}");
}
