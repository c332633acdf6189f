//! Property-based tests for determinism guarantees

use flowhash::{hash_dir, hash_job_input, DirHash, Fingerprint};
use proptest::prelude::*;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Names where several entries share an NFC form
const COLLIDING_NAMES: &[&str] = &[
    "caf\u{e9}",
    "cafe\u{301}",
    "cafe",
    "cafz",
    "b\u{e9}",
    "be\u{301}",
    "\u{212b}",
    "\u{c5}",
    "a",
];

fn scratch_dir() -> TempDir {
    let shm = Path::new("/dev/shm");
    if shm.is_dir() {
        if let Ok(dir) = TempDir::new_in(shm) {
            return dir;
        }
    }
    TempDir::new().unwrap()
}

fn file_sets() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    prop::collection::btree_map("[a-z]{1,8}", prop::collection::vec(any::<u8>(), 0..64), 0..8)
}

fn colliding_file_sets() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    prop::collection::btree_map(
        prop::sample::select(COLLIDING_NAMES).prop_map(str::to_string),
        prop::collection::vec(any::<u8>(), 1..16),
        0..COLLIDING_NAMES.len(),
    )
}

fn write_in_order<'a>(root: &Path, files: impl Iterator<Item = (&'a String, &'a Vec<u8>)>) {
    for (name, content) in files {
        fs::write(root.join(name), content).unwrap();
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Directory hash is the digest of the sorted files' concatenated bytes,
    /// whatever order the files were created in.
    #[test]
    fn test_dir_hash_independent_of_creation_order(files in file_sets()) {
        let forward = scratch_dir();
        let backward = scratch_dir();
        write_in_order(forward.path(), files.iter());
        write_in_order(backward.path(), files.iter().rev());

        let expected: Vec<u8> = files.values().flatten().copied().collect();
        let forward_hash = hash_dir(forward.path(), None).unwrap();

        prop_assert_eq!(&forward_hash, &DirHash::Digest(Fingerprint::of_bytes(&expected)));
        prop_assert_eq!(forward_hash, hash_dir(backward.path(), None).unwrap());
    }

    /// Names sharing a normalized form still hash in one fixed order
    #[test]
    fn test_dir_hash_with_colliding_names_independent_of_creation_order(
        files in colliding_file_sets()
    ) {
        let forward = scratch_dir();
        let backward = scratch_dir();
        write_in_order(forward.path(), files.iter());
        write_in_order(backward.path(), files.iter().rev());

        prop_assert_eq!(
            hash_dir(forward.path(), None).unwrap(),
            hash_dir(backward.path(), None).unwrap()
        );
    }
}

/// Workspace path never affects the job input hash
#[test]
fn test_job_hash_ignores_workspace_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(
                prop::collection::btree_map("[a-z_]{1,12}", "[ -~]{0,16}", 0..6),
                "[ -~]{0,32}",
                "[ -~]{0,32}",
            ),
            |(rest, workspace_a, workspace_b)| {
                let mut job_a: Map<String, Value> = rest
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect();
                let mut job_b = job_a.clone();
                job_a.insert("workflow_workspace".to_string(), Value::String(workspace_a));
                job_b.insert("workflow_workspace".to_string(), Value::String(workspace_b));

                let workflow = serde_json::json!({"steps": [{"name": "fit"}]});
                let hash_a = hash_job_input(&Value::Object(job_a), &workflow).unwrap();
                let hash_b = hash_job_input(&Value::Object(job_b), &workflow).unwrap();
                prop_assert_eq!(hash_a, hash_b);

                Ok(())
            },
        )
        .unwrap();
}

/// Rendered fingerprints always match ^[0-9a-f]{32}$
#[test]
fn test_fingerprint_format_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&any::<Vec<u8>>(), |content| {
            let fingerprint = Fingerprint::of_bytes(&content);
            prop_assert!(Fingerprint::parse(fingerprint.as_str()).is_some());
            Ok(())
        })
        .unwrap();
}
