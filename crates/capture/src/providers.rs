//! Platform service seams
//!
//! The capturer reads the device through these traits. Real deployments
//! implement them over the platform location, Wi-Fi, and telephony
//! services; the `sim` module provides deterministic in-process
//! implementations for tests and demos.

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Location provider class queried for a last-known fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationSource {
    /// Satellite-based provider (GPS/GNSS)
    Satellite,
    /// Network-based provider (cell and Wi-Fi positioning)
    Network,
}

/// A last-known location fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationFix {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Accuracy radius in meters
    pub accuracy: f64,
    /// Fix time (Unix epoch milliseconds)
    pub timestamp_ms: u64,
    /// Provider name as reported by the platform
    pub provider: String,
}

/// A current Wi-Fi association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiAssociation {
    /// Network name
    pub ssid: String,
    /// Access point hardware address
    pub bssid: String,
}

/// Read access to the platform location service.
pub trait LocationService {
    /// Last-known fix from the given provider class, if any.
    fn last_known(&self, source: LocationSource) -> Option<LocationFix>;
}

/// Read access to the platform Wi-Fi service.
pub trait WifiService {
    /// Whether the Wi-Fi radio is enabled.
    fn is_enabled(&self) -> bool;

    /// Current association, `None` when enabled but not associated.
    fn association(&self) -> Result<Option<WifiAssociation>, ProviderError>;
}

/// Read access to the platform telephony service.
pub trait CellService {
    /// Count of currently visible cell towers.
    fn visible_cells(&self) -> Result<usize, ProviderError>;
}
