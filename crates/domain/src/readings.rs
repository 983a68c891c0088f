//! Best-effort reading outcomes for the network subsystems
//!
//! Each reading renders to the exact string stored (and digested) in the
//! snapshot record. Sentinels mark readings that could not be determined.

use std::fmt;

/// Provider name recorded when no location fix is available.
pub const PROVIDER_UNKNOWN: &str = "unknown";

/// Wi-Fi reading when the radio is off, unassociated, or permission is denied.
pub const WIFI_UNAVAILABLE: &str = "wifi_unavailable";

/// Wi-Fi reading when the platform query failed.
pub const WIFI_ERROR: &str = "wifi_error";

/// Cell reading when permission is denied.
pub const CELL_UNAVAILABLE: &str = "cell_unavailable";

/// Cell reading when the platform query failed.
pub const CELL_ERROR: &str = "cell_error";

/// Outcome of a Wi-Fi association query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WifiReading {
    /// Associated with a network
    Associated {
        /// Network name as reported by the platform
        ssid: String,
        /// Access point hardware address
        bssid: String,
    },
    /// Radio off, unassociated, or permission denied
    Unavailable,
    /// Platform query failed
    Error,
}

impl fmt::Display for WifiReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WifiReading::Associated { ssid, bssid } => write!(f, "SSID:{},BSSID:{}", ssid, bssid),
            WifiReading::Unavailable => f.write_str(WIFI_UNAVAILABLE),
            WifiReading::Error => f.write_str(WIFI_ERROR),
        }
    }
}

/// Outcome of a visible-cell count query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellReading {
    /// Count of currently visible cell towers
    Visible(usize),
    /// Permission denied
    Unavailable,
    /// Platform query failed
    Error,
}

impl fmt::Display for CellReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellReading::Visible(count) => write!(f, "cells:{}", count),
            CellReading::Unavailable => f.write_str(CELL_UNAVAILABLE),
            CellReading::Error => f.write_str(CELL_ERROR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wifi_association_rendering() {
        let reading = WifiReading::Associated {
            ssid: "evidence-net".to_string(),
            bssid: "aa:bb:cc:dd:ee:ff".to_string(),
        };

        assert_eq!(
            reading.to_string(),
            "SSID:evidence-net,BSSID:aa:bb:cc:dd:ee:ff"
        );
    }

    #[test]
    fn test_wifi_sentinel_rendering() {
        assert_eq!(WifiReading::Unavailable.to_string(), WIFI_UNAVAILABLE);
        assert_eq!(WifiReading::Error.to_string(), WIFI_ERROR);
    }

    #[test]
    fn test_cell_count_rendering() {
        assert_eq!(CellReading::Visible(0).to_string(), "cells:0");
        assert_eq!(CellReading::Visible(17).to_string(), "cells:17");
    }

    #[test]
    fn test_cell_sentinel_rendering() {
        assert_eq!(CellReading::Unavailable.to_string(), CELL_UNAVAILABLE);
        assert_eq!(CellReading::Error.to_string(), CELL_ERROR);
    }
}
