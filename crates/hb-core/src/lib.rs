//! Core types for Heldenbuch: classes, derived stats, and character files.
//!
//! A [`Character`] is created from a name and one of four classes, its
//! stats follow fixed per-class formulas, and it is stored as a small
//! `Label: value` text file that [`load_character`] reads back.

/// Character classes and their stat formulas.
pub mod class;
/// The character record, factory, level-up, and sheet rendering.
pub mod character;
/// Configuration for creation, progression, and saving.
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// Saving and loading character files.
pub mod persist;
/// The line-oriented character file format.
pub mod sheet;
/// Derived stats and the formulas that compute them.
pub mod stats;
/// Consistency checks for loaded characters.
pub mod validate;

/// Re-export the character record and its helpers.
pub use character::{Character, LevelUp, create_character, display_character};
/// Re-export class types.
pub use class::CharacterClass;
/// Re-export configuration types.
pub use config::{CreatorConfig, UnknownClassPolicy};
/// Re-export error types.
pub use error::{HbError, HbResult};
/// Re-export persistence entry points.
pub use persist::{load_character, save_character};
/// Re-export format parsing.
pub use sheet::parse_sheet;
/// Re-export stat types.
pub use stats::{Stats, calculate_stats, calculate_stats_for};
/// Re-export validation.
pub use validate::{ValidationIssue, validate_character};
