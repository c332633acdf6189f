//! CLI command-name contract for logging.

use crate::cli::parse::Commands;

/// Stable command name used in log fields (e.g. "hash_dir").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::HashDir { .. } => "hash_dir",
        Commands::JobHash { .. } => "job_hash",
        Commands::AccessTimes { .. } => "access_times",
        Commands::SplitCmd { .. } => "split_cmd",
    }
}
