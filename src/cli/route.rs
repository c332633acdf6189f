//! CLI route: single route table and run context. Dispatches to domain functions.

use crate::access::{file_access_times_with, format_access_time};
use crate::cli::command_name;
use crate::cli::parse::Commands;
use crate::command::format_cmd;
use crate::config::{ConfigLoader, FlowhashConfig};
use crate::error::ApiError;
use crate::job::hash_job_input;
use crate::table::Table;
use crate::tree::hasher::DirHasher;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Runtime context for CLI execution: the effective configuration.
pub struct RunContext {
    config: FlowhashConfig,
}

impl RunContext {
    /// Load configuration for `workspace_root`, or from `config_path` when given.
    pub fn new(workspace_root: &Path, config_path: Option<&Path>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(workspace_root)?,
        };
        Self::from_config(config)
    }

    /// Build a context from an already loaded configuration.
    pub fn from_config(config: FlowhashConfig) -> Result<Self, ApiError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &FlowhashConfig {
        &self.config
    }

    /// Run one command and return what should be printed on stdout.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let result = self.execute_inner(command);
        info!(
            command = command_name(command),
            ok = result.is_ok(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::HashDir {
                root,
                include,
                empty_allowlist,
                format,
            } => self.hash_dir(root, include, *empty_allowlist, format),
            Commands::JobHash { job_spec, workflow } => {
                let job_spec = read_json(job_spec)?;
                let workflow = match workflow {
                    Some(path) => read_json(path)?,
                    None => json!({}),
                };
                Ok(hash_job_input(&job_spec, &workflow)?.to_string())
            }
            Commands::AccessTimes { workspace, filter } => self.access_times(workspace, filter),
            Commands::SplitCmd { command, json } => {
                let value = if *json {
                    serde_json::from_str(command)
                        .map_err(|e| ApiError::Serialization(e.to_string()))?
                } else {
                    Value::String(command.clone())
                };
                let argv = format_cmd(&value)?;
                serde_json::to_string(&argv).map_err(|e| ApiError::Serialization(e.to_string()))
            }
        }
    }

    fn hash_dir(
        &self,
        root: &Path,
        include: &[PathBuf],
        empty_allowlist: bool,
        format: &str,
    ) -> Result<String, ApiError> {
        let allowlist = if empty_allowlist || !include.is_empty() {
            Some(include)
        } else {
            None
        };

        let hash = DirHasher::new(self.config.hashing.clone()).hash(root, allowlist)?;

        match format {
            "json" => {
                let output = json!({
                    "root": root.display().to_string(),
                    "hash": hash,
                });
                serde_json::to_string_pretty(&output)
                    .map_err(|e| ApiError::Serialization(e.to_string()))
            }
            "text" => Ok(hash.to_string()),
            other => Err(ApiError::ConfigError(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }

    fn access_times(&self, workspace: &Path, filter: &[String]) -> Result<String, ApiError> {
        let times = file_access_times_with(workspace, self.config.hashing.walker_config())?;
        let rows: Vec<Vec<String>> = times
            .iter()
            .map(|(path, time)| vec![path.display().to_string(), format_access_time(*time)])
            .collect();

        let rendered = Table::new(["path", "accessed"])
            .with_filter(filter.iter().cloned())
            .render(&rows);
        Ok(rendered.strip_suffix('\n').unwrap_or(&rendered).to_string())
    }
}

fn read_json(path: &Path) -> Result<Value, ApiError> {
    let bytes = std::fs::read(path).map_err(|e| ApiError::InvalidInput {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::InvalidInput {
        path: path.to_path_buf(),
        message: format!("not valid JSON: {}", e),
    })
}
