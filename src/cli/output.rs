//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, HashError};

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Hash(HashError::ReadFile { path, source }) => {
            format!("error: cannot read {}: {}", path.display(), source)
        }
        other => format!("error: {}", other),
    }
}
