//! Canonical JSON bytes and domain-separated content hashing.
//!
//! Every report digest flows through this module.
//!
//! # Canonicalization rules
//!
//! 1. Object keys are sorted lexicographically (byte order).
//! 2. No extraneous whitespace (compact form: `{"a":1,"b":2}`).
//! 3. Strings are JSON-escaped per RFC 8259 §7.
//! 4. Numbers must be integers (`i64` or `u64`). Floats are rejected to
//!    prevent cross-platform formatting drift.
//! 5. `null`, `true`, `false` are written literally.

use sha2::{Digest, Sha256};

/// Domain prefix for search report hashing.
pub const DOMAIN_SEARCH_REPORT: &[u8] = b"WAYPOINT::SEARCH_REPORT::V1\0";

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not an integer.
    NonIntegerNumber { raw: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { raw } => {
                write!(f, "non-integer number in canonical JSON: {raw}")
            }
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any JSON number is not
/// representable as `i64` or `u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    check_integers(value)?;
    // `Map` is a `BTreeMap` (no `preserve_order`), so keys already serialize sorted.
    Ok(value.to_string().into_bytes())
}

/// Compute `"sha256:<hex>"` over `domain || data`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

fn check_integers(value: &serde_json::Value) -> Result<(), CanonError> {
    match value {
        serde_json::Value::Number(n) if !(n.is_i64() || n.is_u64()) => {
            Err(CanonError::NonIntegerNumber { raw: n.to_string() })
        }
        serde_json::Value::Array(items) => items.iter().try_for_each(check_integers),
        serde_json::Value::Object(map) => map.values().try_for_each(check_integers),
        _ => Ok(()),
    }
}
