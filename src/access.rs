//! File access-time listing for workspace retention decisions

use crate::error::HashError;
use crate::tree::walker::{Walker, WalkerConfig};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;

/// Last access time of every regular file in a workspace, keyed by path
pub type AccessTimes = BTreeMap<PathBuf, SystemTime>;

/// Collect the access time of every regular file under `workspace`
///
/// Keys are the walked paths (`workspace` joined with the relative path), so
/// they are not canonicalized. A missing workspace yields an empty map.
pub fn file_access_times(workspace: &Path) -> Result<AccessTimes, HashError> {
    file_access_times_with(workspace, WalkerConfig::default())
}

/// [`file_access_times`] with an explicit traversal policy
pub fn file_access_times_with(
    workspace: &Path,
    config: WalkerConfig,
) -> Result<AccessTimes, HashError> {
    if !workspace.exists() {
        return Ok(AccessTimes::new());
    }

    let files = Walker::with_config(workspace.to_path_buf(), config).walk_files()?;

    let mut access_times = AccessTimes::new();
    for file in files {
        let accessed = std::fs::metadata(&file.path)
            .and_then(|metadata| metadata.accessed())
            .map_err(|source| HashError::Metadata {
                path: file.path.clone(),
                source,
            })?;
        access_times.insert(file.path, accessed);
    }

    debug!(
        workspace = %workspace.display(),
        files = access_times.len(),
        "Collected file access times"
    );

    Ok(access_times)
}

/// Render an access time as RFC 3339 in UTC
pub fn format_access_time(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339()
}
