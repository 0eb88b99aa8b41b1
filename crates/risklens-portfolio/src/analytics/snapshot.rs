//! Report snapshot fingerprints.
//!
//! A snapshot digest identifies one report so it can be anchored or compared
//! later. Report maps keep insertion order, so identical inputs and
//! configuration always produce the same digest.

use super::report::HealthReport;
use crate::PortfolioResult;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Hex-encoded SHA-256 of a report's canonical JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotDigest(String);

impl SnapshotDigest {
    /// The 64-character lowercase hex string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The digest with a `0x` prefix, as used by EVM `bytes32` tooling.
    #[must_use]
    pub fn to_prefixed_hex(&self) -> String {
        format!("0x{}", self.0)
    }
}

impl fmt::Display for SnapshotDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Computes the SHA-256 digest of a report's compact JSON encoding.
///
/// # Errors
///
/// Returns [`crate::PortfolioError::Serialization`] if the report cannot be encoded.
pub fn snapshot_digest(report: &HealthReport) -> PortfolioResult<SnapshotDigest> {
    let bytes = serde_json::to_vec(report)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(SnapshotDigest(hex::encode(hasher.finalize())))
}
