//! Configuration for character creation, progression, and saving.

use std::fmt;
use std::str::FromStr;

/// What to do when stats are requested for a class with no formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownClassPolicy {
    /// Return all-zero stats.
    #[default]
    ZeroStats,
    /// Fail with `HbError::UnknownClass`.
    Reject,
}

impl fmt::Display for UnknownClassPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroStats => write!(f, "zero"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

impl FromStr for UnknownClassPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zero" | "zero-stats" => Ok(Self::ZeroStats),
            "reject" => Ok(Self::Reject),
            other => Err(format!("unknown policy \"{other}\". Use: zero, reject")),
        }
    }
}

/// Configuration shared by the factory, level-up, and persistence.
#[derive(Debug, Clone)]
pub struct CreatorConfig {
    /// Policy for classes without a stat formula.
    pub unknown_class: UnknownClassPolicy,
    /// Gold a new character starts with.
    pub starting_gold: i64,
    /// Write saves to a temporary file and rename it over the target.
    pub atomic_saves: bool,
}

impl Default for CreatorConfig {
    fn default() -> Self {
        Self {
            unknown_class: UnknownClassPolicy::ZeroStats,
            starting_gold: 100,
            atomic_saves: true,
        }
    }
}

impl CreatorConfig {
    /// Set the unknown-class policy.
    pub fn with_unknown_class(mut self, policy: UnknownClassPolicy) -> Self {
        self.unknown_class = policy;
        self
    }

    /// Set the starting gold for new characters.
    pub fn with_starting_gold(mut self, gold: i64) -> Self {
        self.starting_gold = gold;
        self
    }

    /// Enable or disable temp-file-then-rename saves.
    pub fn with_atomic_saves(mut self, atomic: bool) -> Self {
        self.atomic_saves = atomic;
        self
    }
}
