//! Configuration System
//!
//! Layered configuration: built-in defaults, then the global config file, then
//! the workspace config file, then `FLOWHASH__*` environment variables.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::tree::walker::WalkerConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowhashConfig {
    /// Directory hashing settings
    #[serde(default)]
    pub hashing: HashingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Directory hashing settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashingConfig {
    /// Follow symbolic links while walking (default: false)
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Read buffer size in bytes used when streaming file contents
    #[serde(default = "default_read_buffer_size")]
    pub read_buffer_size: usize,
}

fn default_read_buffer_size() -> usize {
    64 * 1024
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            read_buffer_size: default_read_buffer_size(),
        }
    }
}

impl HashingConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.read_buffer_size == 0 {
            return Err("read_buffer_size must be greater than zero".to_string());
        }
        Ok(())
    }

    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            follow_symlinks: self.follow_symlinks,
        }
    }
}

impl FlowhashConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = Vec::new();

        if let Err(e) = self.hashing.validate() {
            errors.push(format!("hashing: {}", e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(format!("logging: {}", e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                errors.join("\n")
            )))
        }
    }
}
