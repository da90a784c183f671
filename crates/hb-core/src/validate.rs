//! Consistency checks for character records.
//!
//! The factory and level-up always produce consistent records, but a file
//! can say anything. These checks report what a loaded record gets wrong
//! without refusing to load it.

use crate::character::Character;
use crate::config::UnknownClassPolicy;
use crate::stats::calculate_stats;

/// A warning or error found while checking a character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// The field the issue concerns (e.g. `strength`).
    pub field: &'static str,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.field, self.message)
    }
}

/// Check a character against the class formulas.
///
/// An unknown class is a warning under [`UnknownClassPolicy::ZeroStats`]
/// (its expected stats are zero) and an error under
/// [`UnknownClassPolicy::Reject`].
pub fn validate_character(
    character: &Character,
    policy: UnknownClassPolicy,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if character.name.is_empty() {
        issues.push(ValidationIssue {
            field: "name",
            message: "name is empty".to_string(),
            is_error: true,
        });
    } else if character.name.chars().any(char::is_control) {
        issues.push(ValidationIssue {
            field: "name",
            message: format!("name {:?} contains control characters", character.name),
            is_error: true,
        });
    }

    if character.level == 0 {
        issues.push(ValidationIssue {
            field: "level",
            message: "level must be at least 1".to_string(),
            is_error: true,
        });
    }

    if !character.class.is_known() {
        issues.push(ValidationIssue {
            field: "class",
            message: format!("unknown class \"{}\"", character.class),
            is_error: policy == UnknownClassPolicy::Reject,
        });
    }

    let Ok(expected) = calculate_stats(&character.class, character.level, policy) else {
        return issues;
    };

    let found = character.stats();
    for (field, want, got) in [
        ("strength", expected.strength, found.strength),
        ("magic", expected.magic, found.magic),
        ("health", expected.health, found.health),
    ] {
        if want != got {
            issues.push(ValidationIssue {
                field,
                message: format!(
                    "expected {want} for a level {} {}, found {got}",
                    character.level, character.class
                ),
                is_error: true,
            });
        }
    }

    issues
}
