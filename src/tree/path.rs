//! Path canonicalization and normalization utilities

use crate::error::HashError;
use std::path::{Component, Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a path (resolves symlinks, `..`, `.`)
///
/// The result names the same file on disk and is safe to open or walk.
/// Use [`path_key`] on it to get a comparison key.
pub fn canonicalize_path(path: &Path) -> Result<PathBuf, HashError> {
    // Use dunce for cross-platform canonicalization
    dunce::canonicalize(path).map_err(|e| {
        HashError::InvalidPath(format!("Failed to canonicalize {:?}: {}", path, e))
    })
}

/// Make a path absolute and fold `.` and `..` components without touching
/// the filesystem. Symlinks are left unresolved.
pub fn lexical_absolute(path: &Path) -> Result<PathBuf, HashError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| HashError::InvalidPath(format!("Failed to resolve current dir: {}", e)))?
            .join(path)
    };

    let mut folded = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                folded.pop();
            }
            other => folded.push(other.as_os_str()),
        }
    }
    Ok(folded)
}

/// Normalize a path string (without filesystem access)
///
/// Used for the sort key of walked files and for allow-list lookups. The
/// result is lossy and must never be turned back into a path to open.
pub fn normalize_path_string(path: &str) -> String {
    // Normalize Unicode to NFC
    let mut result: String = path.nfc().collect();

    // Remove trailing separators (except root)
    while result.len() > 1 && result.ends_with(std::path::is_separator) {
        result.pop();
    }

    result
}

/// Normalized comparison key for a path
///
/// Distinct paths can share a key (NFC vs NFD spellings, non-UTF-8 bytes).
pub fn path_key(path: &Path) -> String {
    normalize_path_string(&path.to_string_lossy())
}
