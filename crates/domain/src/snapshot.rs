//! Geo-context snapshot record
//!
//! Pure domain representation of one device-context capture with its
//! tamper-evident digest

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};

use crate::readings::{CELL_UNAVAILABLE, PROVIDER_UNKNOWN, WIFI_UNAVAILABLE};

/// Snapshot digest type (SHA-512 hash as lowercase hex string)
pub type SnapshotDigest = String;

/// One immutable capture of location and network context.
///
/// The digest is a pure function of the other seven fields, computed once
/// at construction. All fields are immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoSnapshot {
    /// Last-known latitude in decimal degrees, 0.0 if unavailable
    pub latitude: f64,

    /// Last-known longitude in decimal degrees, 0.0 if unavailable
    pub longitude: f64,

    /// Location accuracy radius in meters, 0.0 if unavailable
    pub accuracy: f64,

    /// Unix epoch timestamp in milliseconds (fix time, or capture time
    /// when no fix was available)
    pub timestamp_ms: u64,

    /// Location source name, "unknown" if unavailable
    pub provider: String,

    /// Rendered Wi-Fi association or sentinel
    pub wifi_info: String,

    /// Rendered visible-cell count or sentinel
    pub cell_info: String,

    /// SHA-512 digest of the canonical line (lowercase hex)
    pub digest: SnapshotDigest,
}

impl GeoSnapshot {
    /// Construct a snapshot and seal it.
    ///
    /// The digest is computed here and must not be recomputed or assigned
    /// afterwards.
    pub fn new(
        latitude: f64,
        longitude: f64,
        accuracy: f64,
        timestamp_ms: u64,
        provider: impl Into<String>,
        wifi_info: impl Into<String>,
        cell_info: impl Into<String>,
    ) -> Self {
        let mut snapshot = Self {
            latitude,
            longitude,
            accuracy,
            timestamp_ms,
            provider: provider.into(),
            wifi_info: wifi_info.into(),
            cell_info: cell_info.into(),
            digest: String::new(),
        };
        snapshot.digest = snapshot.compute_digest();
        snapshot
    }

    /// Construct the all-sentinel record for a capture where every
    /// subsystem was unavailable.
    pub fn unavailable(timestamp_ms: u64) -> Self {
        Self::new(
            0.0,
            0.0,
            0.0,
            timestamp_ms,
            PROVIDER_UNKNOWN,
            WIFI_UNAVAILABLE,
            CELL_UNAVAILABLE,
        )
    }

    /// Join the seven non-digest values with commas in fixed field order.
    ///
    /// Values are not escaped; the line is a digest preimage, not a
    /// parseable format.
    pub fn canonical_line(&self) -> String {
        format!(
            "{},{},{},{},{},{},{}",
            self.latitude,
            self.longitude,
            self.accuracy,
            self.timestamp_ms,
            self.provider,
            self.wifi_info,
            self.cell_info
        )
    }

    /// Compute the SHA-512 digest of the canonical line.
    ///
    /// The stored digest field is excluded from the preimage.
    pub fn compute_digest(&self) -> SnapshotDigest {
        let hash = Sha512::digest(self.canonical_line().as_bytes());
        hex::encode(hash)
    }

    /// Verify the stored digest against the canonical representation.
    pub fn verify_digest(&self) -> bool {
        self.compute_digest() == self.digest
    }

    /// Serialize the full record, digest included, to JSON.
    pub fn to_canonical_json(&self) -> crate::Result<String> {
        serde_json::to_string(self)
            .map_err(|e| crate::DomainError::SerializationError(e.to_string()))
    }
}
