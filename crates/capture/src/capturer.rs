//! Snapshot capturer
//!
//! Queries the three device subsystems best-effort, single-shot, and
//! assembles the sealed snapshot record. Missing permissions, missing
//! services, and adapter errors all degrade to sentinel readings.

use tracing::{debug, warn};

use geoseal_domain::{CellReading, GeoSnapshot, WifiReading, PROVIDER_UNKNOWN};

use crate::context::DeviceContext;
use crate::permissions::Permission;
use crate::providers::{LocationFix, LocationSource};

/// Capture one snapshot of the device's location and network context.
///
/// Satellite fixes are preferred over network fixes. Each subsystem is
/// queried exactly once, with no retries or timeouts, and the resulting
/// record is sealed with its digest before it is returned.
pub fn capture(context: &DeviceContext) -> GeoSnapshot {
    let fix = read_location(context);
    let wifi = read_wifi(context);
    let cells = read_cells(context);

    match fix {
        Some(fix) => {
            debug!(provider = %fix.provider, "location fix found");
            GeoSnapshot::new(
                fix.latitude,
                fix.longitude,
                fix.accuracy,
                fix.timestamp_ms,
                fix.provider,
                wifi.to_string(),
                cells.to_string(),
            )
        }
        None => {
            debug!("no location fix; recording defaults");
            GeoSnapshot::new(
                0.0,
                0.0,
                0.0,
                current_timestamp(),
                PROVIDER_UNKNOWN,
                wifi.to_string(),
                cells.to_string(),
            )
        }
    }
}

fn read_location(context: &DeviceContext) -> Option<LocationFix> {
    if !context.permissions().is_granted(Permission::FineLocation) {
        debug!("fine-location permission not granted");
        return None;
    }

    context
        .location()
        .last_known(LocationSource::Satellite)
        .or_else(|| context.location().last_known(LocationSource::Network))
}

fn read_wifi(context: &DeviceContext) -> WifiReading {
    if !context.permissions().is_granted(Permission::WifiState) {
        return WifiReading::Unavailable;
    }
    if !context.wifi().is_enabled() {
        return WifiReading::Unavailable;
    }

    match context.wifi().association() {
        Ok(Some(association)) => WifiReading::Associated {
            ssid: association.ssid,
            bssid: association.bssid,
        },
        Ok(None) => WifiReading::Unavailable,
        Err(e) => {
            warn!(error = %e, "wifi query failed");
            WifiReading::Error
        }
    }
}

fn read_cells(context: &DeviceContext) -> CellReading {
    if !context.permissions().is_granted(Permission::ReadPhoneState) {
        return CellReading::Unavailable;
    }

    match context.cell().visible_cells() {
        Ok(count) => CellReading::Visible(count),
        Err(e) => {
            warn!(error = %e, "cell query failed");
            CellReading::Error
        }
    }
}

/// Current wall-clock time in milliseconds, 0 if the clock reads before
/// the epoch.
pub(crate) fn current_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
