//! flowhash CLI Binary
//!
//! Command-line interface for workspace and job-input fingerprints.

use clap::Parser;
use flowhash::cli::{Cli, RunContext};
use flowhash::config::FlowhashConfig;
use flowhash::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{debug, error};

fn main() {
    let cli = Cli::parse();

    let context = match RunContext::new(&cli.workspace, cli.config.as_deref()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", flowhash::cli::map_error(&e));
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, context.config());
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    debug!("flowhash CLI starting");

    match context.execute(&cli.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", flowhash::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and the loaded config.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, config: &FlowhashConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();

    if cli.quiet {
        logging.enabled = false;
    }
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.output = "file".to_string();
        logging.file = Some(file.clone());
    }

    logging
}
