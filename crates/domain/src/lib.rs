//! Domain module for GeoSeal
//!
//! This crate contains pure domain logic with no I/O dependencies:
//! - Snapshot record definition and digest sealing
//! - Reading sentinels and their rendered string forms
//! - Fixed digest test vectors

pub mod error;
pub mod readings;
pub mod snapshot;
pub mod test_vectors;

pub use error::{DomainError, Result};
pub use readings::{
    CellReading, WifiReading, CELL_ERROR, CELL_UNAVAILABLE, PROVIDER_UNKNOWN, WIFI_ERROR,
    WIFI_UNAVAILABLE,
};
pub use snapshot::{GeoSnapshot, SnapshotDigest};
