//! Integration tests for directory fingerprints

use super::test_utils::{sample_workspace, scratch_dir, write_files};
use flowhash::{hash_dir, DirHash, Fingerprint};
use std::fs;
use std::path::PathBuf;

const SAMPLE_DIGEST: &str = "5eb63bbbe01eeed093cb22bb8f5acdc3";

#[test]
fn test_missing_root_returns_sentinel() {
    let hash = hash_dir(&PathBuf::from("a/b/c"), None).unwrap();
    assert_eq!(hash, DirHash::NotFound);
    assert_eq!(hash.to_string(), DirHash::LEGACY_NOT_FOUND.to_string());
}

#[test]
fn test_sample_workspace_golden_digest() {
    let workspace = sample_workspace();
    let hash = hash_dir(workspace.path(), None).unwrap();
    assert_eq!(hash.digest().unwrap(), SAMPLE_DIGEST);
}

#[test]
fn test_single_byte_change_changes_digest() {
    let workspace = sample_workspace();
    fs::write(workspace.path().join("b").join("c.txt"), "World").unwrap();

    let hash = hash_dir(workspace.path(), None).unwrap();
    let digest = hash.digest().unwrap();
    assert_ne!(digest, SAMPLE_DIGEST);
    assert_eq!(digest, "39d11ab1c3c6c9eab3f5b3675f438dbf");
}

#[test]
fn test_single_file_allowlist_equals_file_digest() {
    let workspace = sample_workspace();
    let only = vec![workspace.path().join("a.txt")];
    let hash = hash_dir(workspace.path(), Some(only.as_slice())).unwrap();
    assert_eq!(hash, DirHash::Digest(Fingerprint::of_bytes(b"hello ")));
}

#[test]
fn test_empty_allowlist_equals_empty_digest() {
    let workspace = sample_workspace();
    let hash = hash_dir(workspace.path(), Some(&[][..])).unwrap();
    assert_eq!(hash.digest().unwrap(), "d41d8cd98f00b204e9800998ecf8427e");
}

#[test]
fn test_creation_order_does_not_matter() {
    let files = [
        ("code/fit.py", "import numpy\n"),
        ("data/names.txt", "alice\nbob\n"),
        ("README.md", "# analysis\n"),
        ("results/plot.png", "\u{89}PNG"),
    ];
    let mut reversed = files;
    reversed.reverse();

    let first = scratch_dir();
    let second = scratch_dir();
    write_files(first.path(), &files);
    write_files(second.path(), &reversed);

    assert_eq!(
        hash_dir(first.path(), None).unwrap(),
        hash_dir(second.path(), None).unwrap()
    );
}

#[test]
fn test_names_with_equal_normalized_form_hash_in_fixed_order() {
    let files = [("caf\u{e9}", "ONE"), ("cafe\u{301}", "TWO")];
    let mut reversed = files;
    reversed.reverse();

    let first = scratch_dir();
    let second = scratch_dir();
    write_files(first.path(), &files);
    write_files(second.path(), &reversed);

    let hash = hash_dir(first.path(), None).unwrap();
    assert_eq!(hash, hash_dir(second.path(), None).unwrap());
    // Raw bytes break the tie: "cafe\u{301}" sorts before "caf\u{e9}"
    assert_eq!(hash, DirHash::Digest(Fingerprint::of_bytes(b"TWOONE")));
}

#[test]
fn test_permissions_and_mtime_do_not_matter() {
    let workspace = sample_workspace();
    let before = hash_dir(workspace.path(), None).unwrap();

    // Rewriting identical bytes bumps mtime only
    fs::write(workspace.path().join("a.txt"), "hello ").unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(
            workspace.path().join("a.txt"),
            fs::Permissions::from_mode(0o600),
        )
        .unwrap();
    }

    assert_eq!(hash_dir(workspace.path(), None).unwrap(), before);
}

#[test]
fn test_empty_directories_do_not_matter() {
    let workspace = sample_workspace();
    let before = hash_dir(workspace.path(), None).unwrap();
    fs::create_dir_all(workspace.path().join("empty").join("nested")).unwrap();
    assert_eq!(hash_dir(workspace.path(), None).unwrap(), before);
}

#[test]
fn test_hashing_is_read_only() {
    let workspace = sample_workspace();
    hash_dir(workspace.path(), None).unwrap();
    assert_eq!(
        fs::read_to_string(workspace.path().join("a.txt")).unwrap(),
        "hello "
    );
    assert_eq!(fs::read_dir(workspace.path()).unwrap().count(), 2);
}
