//! CLI parse: clap types for flowhash. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// flowhash CLI - Workspace and job-input fingerprints for workflow caching
#[derive(Parser)]
#[command(name = "flowhash")]
#[command(about = "Deterministic workspace and job-input fingerprints for workflow cache reuse")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root used to locate .flowhash.toml
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log file path (switches log output to the file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fingerprint the files under a directory (prints -1 if it does not exist)
    HashDir {
        /// Directory to hash
        root: PathBuf,
        /// Restrict hashing to these files (repeatable)
        #[arg(long = "include", conflicts_with = "empty_allowlist")]
        include: Vec<PathBuf>,
        /// Use an empty allow-list (digest of zero bytes)
        #[arg(long)]
        empty_allowlist: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Fingerprint a job specification and its workflow descriptor
    JobHash {
        /// JSON file holding the job specification
        #[arg(long)]
        job_spec: PathBuf,
        /// JSON file holding the workflow descriptor (default: {})
        #[arg(long)]
        workflow: Option<PathBuf>,
    },
    /// List the last access time of every file in a workspace
    AccessTimes {
        /// Workspace directory
        workspace: PathBuf,
        /// Show only these columns (path, accessed)
        #[arg(long)]
        filter: Vec<String>,
    },
    /// Tokenize a command into an argv JSON array
    SplitCmd {
        /// Command string, or a JSON value with --json
        command: String,
        /// Interpret COMMAND as JSON (a string or a list of strings)
        #[arg(long)]
        json: bool,
    },
}
