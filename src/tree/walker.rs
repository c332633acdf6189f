//! Filesystem walker collecting the regular files under a root

use crate::error::HashError;
use crate::tree::path::path_key;
use std::path::PathBuf;
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

/// A regular file found during a walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path as produced by joining the walked directory and the file name
    pub path: PathBuf,
    /// Normalized form of `path`, used for ordering and allow-list lookups
    pub key: String,
}

/// Filesystem walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false for determinism)
    pub follow_symlinks: bool,
}

/// Filesystem walker
///
/// Only regular files are collected. Symbolic links are skipped unless
/// `follow_symlinks` is set, in which case links to regular files are
/// collected under the link's own path. FIFOs, sockets and devices are
/// always skipped.
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the filesystem and collect all regular files
    ///
    /// Returns files sorted by normalized path, then by raw path where two
    /// distinct paths share a normalized key.
    pub fn walk_files(&self) -> Result<Vec<FileEntry>, HashError> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.root).follow_links(self.config.follow_symlinks);

        for entry in walker {
            let entry = entry.map_err(|source| HashError::Walk {
                root: self.root.clone(),
                source,
            })?;

            // With follow_links the file type is that of the link target
            let file_type = entry.file_type();
            if file_type.is_file() {
                let path = entry.into_path();
                let key = path_key(&path);
                files.push(FileEntry { path, key });
            } else if file_type.is_symlink() {
                trace!(path = %entry.path().display(), "Skipping symbolic link");
            } else if !file_type.is_dir() {
                warn!(path = %entry.path().display(), "Skipping special file");
            }
        }

        files.sort_by(|a, b| {
            a.key
                .cmp(&b.key)
                .then_with(|| a.path.as_os_str().cmp(b.path.as_os_str()))
        });

        debug!(
            root = %self.root.display(),
            files = files.len(),
            follow_symlinks = self.config.follow_symlinks,
            "Walked directory"
        );

        Ok(files)
    }
}
