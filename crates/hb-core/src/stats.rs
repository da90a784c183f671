//! Derived stats and the per-class linear formulas that produce them.
//!
//! Every built-in class grows strength, magic, and health linearly with
//! level: `base + per_level * level`. Levels are unbounded, so the
//! arithmetic saturates instead of overflowing.

use serde::{Deserialize, Serialize};

use crate::class::CharacterClass;
use crate::config::UnknownClassPolicy;
use crate::error::{HbError, HbResult};

/// The three stats derived from class and level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    /// Physical power.
    pub strength: u32,
    /// Spellcasting power.
    pub magic: u32,
    /// Hit points.
    pub health: u32,
}

impl Stats {
    /// The all-zero triple returned for unknown classes.
    pub const ZERO: Stats = Stats {
        strength: 0,
        magic: 0,
        health: 0,
    };
}

/// Linear growth of a single stat: `base + per_level * level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Growth {
    /// Value before any levels are applied.
    pub base: u32,
    /// Increase per level.
    pub per_level: u32,
}

impl Growth {
    /// Value of this stat at `level`.
    pub fn at(&self, level: u32) -> u32 {
        self.base.saturating_add(self.per_level.saturating_mul(level))
    }
}

impl std::fmt::Display for Growth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.per_level == 1 {
            write!(f, "{}+L", self.base)
        } else {
            write!(f, "{}+{}L", self.base, self.per_level)
        }
    }
}

/// The growth of all three stats for one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatFormula {
    /// Strength growth.
    pub strength: Growth,
    /// Magic growth.
    pub magic: Growth,
    /// Health growth.
    pub health: Growth,
}

impl StatFormula {
    /// Build a formula from `(base, per_level)` pairs for strength, magic, health.
    pub fn new(strength: (u32, u32), magic: (u32, u32), health: (u32, u32)) -> Self {
        let growth = |(base, per_level)| Growth { base, per_level };
        Self {
            strength: growth(strength),
            magic: growth(magic),
            health: growth(health),
        }
    }

    /// Stats at `level`.
    pub fn at(&self, level: u32) -> Stats {
        Stats {
            strength: self.strength.at(level),
            magic: self.magic.at(level),
            health: self.health.at(level),
        }
    }
}

/// Calculate the stats for `class` at `level`.
///
/// Custom classes have no formula; `policy` decides whether they yield
/// [`Stats::ZERO`] or an [`HbError::UnknownClass`].
pub fn calculate_stats(
    class: &CharacterClass,
    level: u32,
    policy: UnknownClassPolicy,
) -> HbResult<Stats> {
    match (class.stats_at(level), policy) {
        (Some(stats), _) => Ok(stats),
        (None, UnknownClassPolicy::ZeroStats) => Ok(Stats::ZERO),
        (None, UnknownClassPolicy::Reject) => Err(HbError::UnknownClass(class.to_string())),
    }
}

/// Calculate stats from a raw, case-insensitive class tag.
pub fn calculate_stats_for(tag: &str, level: u32, policy: UnknownClassPolicy) -> HbResult<Stats> {
    calculate_stats(&CharacterClass::parse(tag), level, policy)
}
