//! Merge rules: defaults, override order, conflict handling.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment};

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("hashing.follow_symlinks", false)?
        .set_default("hashing.read_buffer_size", 64_i64 * 1024)?
        .set_default("logging.enabled", true)?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")
}

/// Environment source applied last: `FLOWHASH__HASHING__FOLLOW_SYMLINKS=true`
pub fn environment() -> Environment {
    Environment::with_prefix("FLOWHASH")
        .separator("__")
        .try_parsing(true)
}
