//! Shared workspace fixtures for integration tests

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Files of the sample workflow workspace, as (relative path, content)
pub const SAMPLE_WORKSPACE: &[(&str, &str)] = &[
    ("a.txt", "hello "),
    ("b/c.txt", "world"),
];

/// Write `files` under `root`, creating parent directories, in the given order
pub fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

/// A temp dir on tmpfs when available
///
/// tmpfs lists entries in creation order, so trees built in different orders
/// really are read back differently. Falls back to the default temp dir.
pub fn scratch_dir() -> TempDir {
    let shm = Path::new("/dev/shm");
    if shm.is_dir() {
        if let Ok(dir) = TempDir::new_in(shm) {
            return dir;
        }
    }
    TempDir::new().unwrap()
}

/// A temporary copy of the sample workspace
pub fn sample_workspace() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    write_files(temp_dir.path(), SAMPLE_WORKSPACE);
    temp_dir
}
