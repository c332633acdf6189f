//! Directory content hashing
//!
//! The fingerprint of a directory is the MD5 digest of the concatenated bytes
//! of its included files, fed in normalized path order. Nothing but file bytes
//! reaches the digest: no names, no separators, no metadata. Two layouts whose
//! sorted contents concatenate to the same byte stream share a fingerprint.

use crate::config::HashingConfig;
use crate::error::HashError;
use crate::tree::path;
use crate::tree::walker::{FileEntry, Walker};
use crate::types::{DirHash, Fingerprint};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Hash a directory with the default configuration
///
/// See [`DirHasher::hash`].
pub fn hash_dir(root: &Path, allowlist: Option<&[PathBuf]>) -> Result<DirHash, HashError> {
    DirHasher::new(HashingConfig::default()).hash(root, allowlist)
}

/// Computes directory fingerprints
pub struct DirHasher {
    config: HashingConfig,
}

impl DirHasher {
    pub fn new(config: HashingConfig) -> Self {
        Self { config }
    }

    /// Fingerprint the regular files under `root`
    ///
    /// - `root` missing: [`DirHash::NotFound`], not an error.
    /// - `allowlist` `None`: every regular file under `root`.
    /// - `allowlist` `Some(&[])`: no files, so the digest of zero bytes.
    /// - otherwise only walked files whose normalized path is in the list.
    ///
    /// A candidate that cannot be read fails the whole call.
    pub fn hash(&self, root: &Path, allowlist: Option<&[PathBuf]>) -> Result<DirHash, HashError> {
        if !root.exists() {
            debug!(root = %root.display(), "Hash root does not exist");
            return Ok(DirHash::NotFound);
        }

        let files = self.candidates(root, allowlist)?;

        let mut context = md5::Context::new();
        for file in &files {
            self.consume_file(&mut context, &file.path)?;
        }
        let fingerprint = Fingerprint::from_digest(context.compute());

        debug!(
            root = %root.display(),
            files = files.len(),
            fingerprint = %fingerprint,
            "Hashed directory"
        );

        Ok(DirHash::Digest(fingerprint))
    }

    /// Sorted files to feed into the digest
    fn candidates(
        &self,
        root: &Path,
        allowlist: Option<&[PathBuf]>,
    ) -> Result<Vec<FileEntry>, HashError> {
        if matches!(allowlist, Some(list) if list.is_empty()) {
            return Ok(Vec::new());
        }

        // Walk from the canonical root so walked paths are absolute. The root
        // is walked as resolved on disk; only keys are normalized.
        let canonical_root = path::canonicalize_path(root)?;
        let files = Walker::with_config(canonical_root, self.config.walker_config()).walk_files()?;

        match allowlist {
            None => Ok(files),
            Some(list) => {
                let allowed = allowlist_keys(list)?;
                Ok(files
                    .into_iter()
                    .filter(|file| allowed.contains(&file.key))
                    .collect())
            }
        }
    }

    fn consume_file(&self, context: &mut md5::Context, file_path: &Path) -> Result<(), HashError> {
        let read_error = |source: std::io::Error| HashError::ReadFile {
            path: file_path.to_path_buf(),
            source,
        };

        let file = File::open(file_path).map_err(read_error)?;
        let mut reader = BufReader::with_capacity(self.config.read_buffer_size.max(1), file);
        std::io::copy(&mut reader, context).map_err(read_error)?;
        Ok(())
    }
}

/// Normalized lookup keys for an allow-list
///
/// Each entry contributes its lexical absolute form and, when it exists, its
/// canonical form, so both `/tmp/ws/a` and a symlinked spelling of the same
/// file match the walk from the canonical root.
fn allowlist_keys(list: &[PathBuf]) -> Result<HashSet<String>, HashError> {
    let mut keys = HashSet::with_capacity(list.len() * 2);
    for entry in list {
        keys.insert(path::path_key(&path::lexical_absolute(entry)?));
        if let Ok(canonical) = path::canonicalize_path(entry) {
            keys.insert(path::path_key(&canonical));
        }
    }
    Ok(keys)
}
