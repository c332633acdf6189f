//! Core value types shared by the hashers.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Length of a rendered fingerprint (128-bit digest as lowercase hex)
pub const FINGERPRINT_LEN: usize = 32;

/// A 128-bit content fingerprint rendered as 32 lowercase hex characters
///
/// Content identity only. Not suitable for anything security sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub(crate) fn from_digest(digest: md5::Digest) -> Self {
        Self(hex::encode(digest.0))
    }

    /// Fingerprint of a single byte slice
    pub fn of_bytes(data: &[u8]) -> Self {
        Self::from_digest(md5::compute(data))
    }

    /// Fingerprint of zero bytes, the result of hashing an empty candidate set
    pub fn empty() -> Self {
        Self::of_bytes(&[])
    }

    /// Parse a previously rendered fingerprint, rejecting anything that is not
    /// exactly 32 lowercase hex characters.
    pub fn parse(value: &str) -> Option<Self> {
        let valid = value.len() == FINGERPRINT_LEN
            && value
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        valid.then(|| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Fingerprint {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Fingerprint {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Result of hashing a directory root
///
/// A missing root is a distinct outcome, never a digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirHash {
    /// The root does not exist on the filesystem
    NotFound,
    /// Digest of the included files
    Digest(Fingerprint),
}

impl DirHash {
    /// Numeric form of [`DirHash::NotFound`] understood by legacy consumers
    pub const LEGACY_NOT_FOUND: i64 = -1;

    pub fn digest(&self) -> Option<&Fingerprint> {
        match self {
            DirHash::NotFound => None,
            DirHash::Digest(fingerprint) => Some(fingerprint),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DirHash::NotFound)
    }
}

impl fmt::Display for DirHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirHash::NotFound => write!(f, "{}", Self::LEGACY_NOT_FOUND),
            DirHash::Digest(fingerprint) => fingerprint.fmt(f),
        }
    }
}

impl Serialize for DirHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DirHash::NotFound => serializer.serialize_i64(Self::LEGACY_NOT_FOUND),
            DirHash::Digest(fingerprint) => fingerprint.serialize(serializer),
        }
    }
}
