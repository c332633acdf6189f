//! Error types for the flowhash fingerprinting utilities.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while walking, reading, or canonicalizing hash inputs
#[derive(Debug, Error)]
pub enum HashError {
    #[error("Failed to walk directory {root:?}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read file {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read metadata for {path:?}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Failed to serialize canonical document: {0}")]
    Canonicalize(#[from] serde_json::Error),
}

/// Errors raised while turning a command description into an argv vector
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Command should be a list or a string and not {0}")]
    InvalidType(String),

    #[error("Command could not be tokenized: {0}")]
    Unparseable(String),
}

/// Top-level errors surfaced by the CLI and the configuration layer
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Hash error: {0}")]
    Hash(#[from] HashError),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input {path:?}: {message}")]
    InvalidInput { path: PathBuf, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
