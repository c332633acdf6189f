//! flowhash: Deterministic Workspace Fingerprints
//!
//! Content fingerprints for workflow workspaces and job inputs, consumed by a
//! workflow orchestrator to decide when prior outputs can be reused. Also
//! carries the small helpers its command line clients share: file access-time
//! listing, command tokenizing and a plain table printer.

pub mod access;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod job;
pub mod logging;
pub mod table;
pub mod tree;
pub mod types;

pub use error::{ApiError, CommandError, HashError};
pub use job::hash_job_input;
pub use tree::hasher::{hash_dir, DirHasher};
pub use types::{DirHash, Fingerprint};
