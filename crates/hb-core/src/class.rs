use std::fmt;

use serde::{Deserialize, Serialize};

use crate::stats::{StatFormula, Stats};

/// A character class. Extensible via `Custom(String)` for class names read
/// from a file that match none of the built-in classes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CharacterClass {
    /// Heavy melee fighter: strength and health scale fastest.
    Warrior,
    /// Spellcaster: magic scales fastest.
    Mage,
    /// Balanced between strength and magic.
    Rogue,
    /// Healer with high health and steady magic.
    Cleric,
    /// A class name with no stat formula (e.g. the `Unknown` load default).
    Custom(String),
}

impl CharacterClass {
    /// The four classes a new character may pick.
    pub const BUILT_IN: [CharacterClass; 4] = [
        CharacterClass::Warrior,
        CharacterClass::Mage,
        CharacterClass::Rogue,
        CharacterClass::Cleric,
    ];

    /// Parse a class tag case-insensitively. Unrecognized tags become
    /// `Custom` with the original text preserved.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "warrior" => Self::Warrior,
            "mage" => Self::Mage,
            "rogue" => Self::Rogue,
            "cleric" => Self::Cleric,
            _ => Self::Custom(s.to_string()),
        }
    }

    /// Returns true for the four built-in classes.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// The per-level stat formula, or `None` for a custom class.
    pub fn formula(&self) -> Option<StatFormula> {
        let formula = match self {
            Self::Warrior => StatFormula::new((10, 3), (3, 1), (100, 10)),
            Self::Mage => StatFormula::new((4, 1), (12, 3), (80, 8)),
            Self::Rogue => StatFormula::new((7, 2), (7, 2), (70, 7)),
            Self::Cleric => StatFormula::new((6, 2), (10, 2), (90, 9)),
            Self::Custom(_) => return None,
        };
        Some(formula)
    }

    /// Stats for this class at `level`, or `None` for a custom class.
    pub fn stats_at(&self, level: u32) -> Option<Stats> {
        self.formula().map(|f| f.at(level))
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warrior => write!(f, "Warrior"),
            Self::Mage => write!(f, "Mage"),
            Self::Rogue => write!(f, "Rogue"),
            Self::Cleric => write!(f, "Cleric"),
            Self::Custom(s) => write!(f, "{s}"),
        }
    }
}

impl From<String> for CharacterClass {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<CharacterClass> for String {
    fn from(class: CharacterClass) -> Self {
        class.to_string()
    }
}
