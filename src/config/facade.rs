//! Config loading facade: the only entry point for building a FlowhashConfig.

use super::merge;
use super::sources::{global_file, workspace_file};
use super::FlowhashConfig;
use config::{ConfigError, File};
use std::path::Path;
use tracing::debug;

/// Loads [`FlowhashConfig`] from layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, global file, workspace file, then environment.
    pub fn load(workspace_root: &Path) -> Result<FlowhashConfig, ConfigError> {
        let builder = merge::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let config = builder.add_source(merge::environment()).build()?;

        debug!(workspace = %workspace_root.display(), "Loaded layered configuration");
        config.try_deserialize()
    }

    /// Defaults, the given file (required), then environment.
    pub fn load_from_file(path: &Path) -> Result<FlowhashConfig, ConfigError> {
        let config = merge::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .add_source(merge::environment())
            .build()?;

        debug!(config_path = %path.display(), "Loaded configuration file");
        config.try_deserialize()
    }
}
