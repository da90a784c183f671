//! Saving and loading character files.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::character::Character;
use crate::config::CreatorConfig;
use crate::error::{HbError, HbResult};
use crate::sheet::parse_sheet;

/// Save `character` to `path`, overwriting any existing file.
///
/// The parent directory must already exist, and an existing file must be
/// writable. With `config.atomic_saves` the text goes to a temporary file
/// in the same directory first and is renamed over the target, so a failed
/// write never leaves a truncated file behind.
pub fn save_character(
    character: &Character,
    path: &Path,
    config: &CreatorConfig,
) -> HbResult<()> {
    if path.as_os_str().is_empty() {
        return Err(HbError::InvalidPath);
    }

    let dir = path.parent().filter(|d| !d.as_os_str().is_empty());
    if let Some(dir) = dir.filter(|d| !d.is_dir()) {
        tracing::warn!(dir = %dir.display(), "save directory does not exist");
        return Err(HbError::DirectoryNotFound(dir.to_path_buf()));
    }

    let text = character.to_sheet_text();
    if config.atomic_saves {
        write_atomic(path, &text)?;
    } else {
        fs::write(path, &text).map_err(|source| io_error(path, source))?;
    }

    tracing::debug!(name = %character.name, path = %path.display(), "saved character");
    Ok(())
}

/// Load a character from `path`.
///
/// Returns [`HbError::NotFound`] if no file exists there.
pub fn load_character(path: &Path) -> HbResult<Character> {
    if !path.is_file() {
        tracing::warn!(path = %path.display(), "character file not found");
        return Err(HbError::NotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path).map_err(|source| io_error(path, source))?;
    let character = parse_sheet(&text)?;

    tracing::debug!(name = %character.name, path = %path.display(), "loaded character");
    Ok(character)
}

fn write_atomic(path: &Path, text: &str) -> HbResult<()> {
    match fs::symlink_metadata(path) {
        // Renaming over a link would replace it; write through it instead.
        Ok(meta) if meta.file_type().is_symlink() => {
            return fs::write(path, text).map_err(|source| io_error(path, source));
        }
        // Rename only needs directory permissions, so check the target itself.
        Ok(_) => {
            fs::OpenOptions::new()
                .write(true)
                .open(path)
                .map_err(|source| io_error(path, source))?;
        }
        Err(_) => {}
    }

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp = tempfile::Builder::new()
        .prefix(".hb-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|source| io_error(path, source))?;
    temp.write_all(text.as_bytes())
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|source| io_error(path, source))?;

    if let Ok(meta) = fs::metadata(path) {
        fs::set_permissions(temp.path(), meta.permissions())
            .map_err(|source| io_error(path, source))?;
    }

    // Dropping the temp file on any early return removes it.
    temp.persist(path)
        .map_err(|e| io_error(path, e.error))?;
    Ok(())
}

fn io_error(path: &Path, source: std::io::Error) -> HbError {
    tracing::warn!(path = %path.display(), %source, "file operation failed");
    HbError::Io {
        path: path.to_path_buf(),
        source,
    }
}
