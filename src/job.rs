//! Job input fingerprints
//!
//! A job is identified by its specification plus the workflow descriptor it
//! belongs to. The workspace location is not part of the identity: the same job
//! may run from different workspaces and still be a cache hit.

use crate::error::HashError;
use crate::types::Fingerprint;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// Job spec key holding the workspace path, excluded from the fingerprint
pub const WORKSPACE_KEY: &str = "workflow_workspace";

/// Fingerprint a job specification together with its workflow descriptor
///
/// Both documents are canonicalized (keys sorted at every depth, compact
/// serialization) and fed to one digest, job spec first. The top-level
/// [`WORKSPACE_KEY`] of the job spec is dropped. Inputs are not modified.
pub fn hash_job_input(job_spec: &Value, workflow: &Value) -> Result<Fingerprint, HashError> {
    let mut job_spec = canonicalize(job_spec);
    if let Value::Object(map) = &mut job_spec {
        map.remove(WORKSPACE_KEY);
    }
    let workflow = canonicalize(workflow);

    let mut context = md5::Context::new();
    serde_json::to_writer(&mut context, &job_spec)?;
    serde_json::to_writer(&mut context, &workflow)?;
    let fingerprint = Fingerprint::from_digest(context.compute());

    debug!(fingerprint = %fingerprint, "Hashed job input");
    Ok(fingerprint)
}

/// Typed variant of [`hash_job_input`] for callers holding their own structs
pub fn hash_job_input_from<J, W>(job_spec: &J, workflow: &W) -> Result<Fingerprint, HashError>
where
    J: Serialize + ?Sized,
    W: Serialize + ?Sized,
{
    let job_spec = serde_json::to_value(job_spec)?;
    let workflow = serde_json::to_value(workflow)?;
    hash_job_input(&job_spec, &workflow)
}

/// Rebuild a JSON value with object keys in sorted order at every depth
///
/// Array order is significant and kept as is.
pub fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<&String, Value> =
                map.iter().map(|(k, v)| (k, canonicalize(v))).collect();
            let mut canonical = Map::with_capacity(sorted.len());
            for (key, value) in sorted {
                canonical.insert(key.clone(), value);
            }
            Value::Object(canonical)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}
