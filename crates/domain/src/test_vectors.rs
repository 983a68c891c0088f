//! Test vectors for deterministic digest verification.
//!
//! These vectors pin the canonical line format and the SHA-512 digest so
//! that snapshot digests stay stable across builds and environments. Each
//! vector contains the snapshot field values, the expected canonical line,
//! and the expected digest (hex encoded).

use crate::snapshot::GeoSnapshot;

/// A fixed snapshot digest vector.
#[derive(Debug, Clone)]
pub struct DigestTestVector {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: f64,
    pub timestamp_ms: u64,
    pub provider: &'static str,
    pub wifi_info: &'static str,
    pub cell_info: &'static str,
    pub expected_line: &'static str,
    pub expected_digest: &'static str,
}

impl DigestTestVector {
    /// Build the snapshot described by this vector.
    pub fn to_snapshot(&self) -> GeoSnapshot {
        GeoSnapshot::new(
            self.latitude,
            self.longitude,
            self.accuracy,
            self.timestamp_ms,
            self.provider,
            self.wifi_info,
            self.cell_info,
        )
    }
}

/// Get the test vectors.
pub fn get_test_vectors() -> Vec<DigestTestVector> {
    vec![
        DigestTestVector {
            name: "vector_1_all_sentinels",
            latitude: 0.0,
            longitude: 0.0,
            accuracy: 0.0,
            timestamp_ms: 1700000000000,
            provider: "unknown",
            wifi_info: "wifi_unavailable",
            cell_info: "cell_unavailable",
            expected_line: "0,0,0,1700000000000,unknown,wifi_unavailable,cell_unavailable",
            expected_digest: "767b0bb3db535e1c64f283a2bd89c4a7a429efcd477ef711f5603c5a8ab2f90b\
                              0321e306d80eabf15422761e711febfdd042892e2ecac11837f14c8a873bf88a",
        },
        DigestTestVector {
            name: "vector_2_full_reading",
            latitude: 34.052235,
            longitude: -118.243683,
            accuracy: 12.5,
            timestamp_ms: 1700000000000,
            provider: "gps",
            wifi_info: "SSID:evidence-net,BSSID:aa:bb:cc:dd:ee:ff",
            cell_info: "cells:4",
            expected_line: "34.052235,-118.243683,12.5,1700000000000,gps,\
                            SSID:evidence-net,BSSID:aa:bb:cc:dd:ee:ff,cells:4",
            expected_digest: "5df105635cfcbefae76efee6d61f7c4b673c1d77464a62622987420ea0be06e8\
                              5aa9ae527cd6575c4cff4df1090a20801f7d26df28902e78d3d387526b30c03d",
        },
    ]
}
