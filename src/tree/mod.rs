//! Filesystem traversal and directory fingerprinting
//!
//! Walks a workspace, orders its regular files deterministically and digests
//! their contents into a single fingerprint.

pub mod hasher;
pub mod path;
pub mod walker;
