use std::path::PathBuf;

/// Alias for `Result<T, HbError>`.
pub type HbResult<T> = Result<T, HbError>;

/// Errors that can occur when creating, saving, or loading a character.
#[derive(Debug, thiserror::Error)]
pub enum HbError {
    /// A character was created with an empty name.
    #[error("invalid name: a character needs a name")]
    EmptyName,

    /// A name that cannot be stored on a single line as written.
    #[error("invalid name {0:?}: no control characters or surrounding whitespace")]
    InvalidName(String),

    /// A level-up would take the level past the largest representable value.
    #[error("{name} is already at the maximum level ({level})")]
    LevelOverflow {
        /// Name of the character.
        name: String,
        /// The current, maximal level.
        level: u32,
    },

    /// A class tag is not one of Warrior, Mage, Rogue, or Cleric.
    #[error("invalid class \"{0}\": choose Warrior, Mage, Rogue, or Cleric")]
    UnknownClass(String),

    /// A save was requested with an empty target path.
    #[error("invalid path: no file name given")]
    InvalidPath,

    /// The directory that should contain a save file does not exist.
    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The character file to load does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A numeric field in a character file could not be parsed.
    #[error("line {line}: invalid value \"{value}\" for {field}")]
    MalformedField {
        /// The normalized field key (e.g. `level`).
        field: String,
        /// The raw value as it appeared in the file.
        value: String,
        /// 1-based line number.
        line: usize,
    },

    /// The filesystem refused a read or write.
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        /// The path being read or written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl HbError {
    /// Returns true for errors caused by caller input rather than the filesystem.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyName | Self::InvalidName(_) | Self::UnknownClass(_)
        )
    }
}
