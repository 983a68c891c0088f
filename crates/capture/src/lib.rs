//! Snapshot capture for GeoSeal
//!
//! Best-effort, single-shot reads of the device's location, Wi-Fi, and
//! cellular context, sealed into a tamper-evident record. A capture
//! cannot fail: every degraded subsystem resolves to a sentinel reading.

pub mod capturer;
pub mod context;
pub mod error;
pub mod permissions;
pub mod providers;
pub mod sim;

pub use capturer::capture;
pub use context::DeviceContext;
pub use error::ProviderError;
pub use permissions::{Permission, PermissionSet};
pub use providers::{
    CellService, LocationFix, LocationService, LocationSource, WifiAssociation, WifiService,
};
