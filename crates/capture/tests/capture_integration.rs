//! End-to-end capture behavior against simulated platform services.

use sha2::{Digest, Sha512};

use geoseal_capture::sim::{
    simulated_context, SimulatedCellService, SimulatedLocationService, SimulatedWifiService,
};
use geoseal_capture::{capture, DeviceContext, LocationFix, PermissionSet, WifiAssociation};
use geoseal_core::Config;
use geoseal_domain::{CELL_ERROR, CELL_UNAVAILABLE, PROVIDER_UNKNOWN, WIFI_ERROR, WIFI_UNAVAILABLE};

fn sample_fix() -> LocationFix {
    LocationFix {
        latitude: 34.052235,
        longitude: -118.243683,
        accuracy: 12.5,
        timestamp_ms: 1700000000000,
        provider: "gps".to_string(),
    }
}

fn sample_association() -> WifiAssociation {
    WifiAssociation {
        ssid: "evidence-net".to_string(),
        bssid: "aa:bb:cc:dd:ee:ff".to_string(),
    }
}

fn context_with(
    permissions: PermissionSet,
    wifi: SimulatedWifiService,
    cell: SimulatedCellService,
) -> DeviceContext {
    DeviceContext::new(
        permissions,
        Box::new(SimulatedLocationService {
            satellite: Some(sample_fix()),
            network: None,
        }),
        Box::new(wifi),
        Box::new(cell),
    )
}

fn healthy_context(permissions: PermissionSet) -> DeviceContext {
    context_with(
        permissions,
        SimulatedWifiService {
            enabled: true,
            association: Some(sample_association()),
            fail: false,
        },
        SimulatedCellService {
            count: 7,
            fail: false,
        },
    )
}

#[test]
fn test_all_permissions_denied_records_sentinels() {
    let snapshot = capture(&healthy_context(PermissionSet::new()));

    assert_eq!(snapshot.latitude, 0.0);
    assert_eq!(snapshot.longitude, 0.0);
    assert_eq!(snapshot.accuracy, 0.0);
    assert_eq!(snapshot.provider, PROVIDER_UNKNOWN);
    assert_eq!(snapshot.wifi_info, WIFI_UNAVAILABLE);
    assert_eq!(snapshot.cell_info, CELL_UNAVAILABLE);
    assert!(snapshot.timestamp_ms > 0, "capture time must be recorded");
    assert!(snapshot.verify_digest());
}

#[test]
fn test_granted_capture_records_fix_and_network_context() {
    let snapshot = capture(&healthy_context(PermissionSet::grant_all()));

    assert_eq!(snapshot.latitude, 34.052235);
    assert_eq!(snapshot.longitude, -118.243683);
    assert_eq!(snapshot.accuracy, 12.5);
    assert_eq!(snapshot.timestamp_ms, 1700000000000);
    assert_eq!(snapshot.provider, "gps");
    assert_eq!(
        snapshot.wifi_info,
        "SSID:evidence-net,BSSID:aa:bb:cc:dd:ee:ff"
    );
    assert_eq!(snapshot.cell_info, "cells:7");
    assert!(snapshot.verify_digest());
}

#[test]
fn test_wifi_failure_degrades_to_error_sentinel() {
    let context = context_with(
        PermissionSet::grant_all(),
        SimulatedWifiService {
            enabled: true,
            association: Some(sample_association()),
            fail: true,
        },
        SimulatedCellService {
            count: 7,
            fail: false,
        },
    );

    let snapshot = capture(&context);

    assert_eq!(snapshot.wifi_info, WIFI_ERROR);
    assert_eq!(snapshot.cell_info, "cells:7");
    assert!(snapshot.verify_digest());
}

#[test]
fn test_cell_failure_degrades_to_error_sentinel() {
    let context = context_with(
        PermissionSet::grant_all(),
        SimulatedWifiService {
            enabled: true,
            association: Some(sample_association()),
            fail: false,
        },
        SimulatedCellService {
            count: 0,
            fail: true,
        },
    );

    let snapshot = capture(&context);

    assert_eq!(snapshot.cell_info, CELL_ERROR);
    assert_eq!(
        snapshot.wifi_info,
        "SSID:evidence-net,BSSID:aa:bb:cc:dd:ee:ff"
    );
    assert!(snapshot.verify_digest());
}

#[test]
fn test_digest_matches_external_sha512_recomputation() {
    let snapshot = capture(&healthy_context(PermissionSet::grant_all()));

    let line = format!(
        "{},{},{},{},{},{},{}",
        snapshot.latitude,
        snapshot.longitude,
        snapshot.accuracy,
        snapshot.timestamp_ms,
        snapshot.provider,
        snapshot.wifi_info,
        snapshot.cell_info
    );
    let expected = hex::encode(Sha512::digest(line.as_bytes()));

    assert_eq!(snapshot.digest, expected);
    assert_eq!(snapshot.digest.len(), 128);
}

#[test]
fn test_identical_contexts_produce_identical_digests() {
    let snapshot1 = capture(&healthy_context(PermissionSet::grant_all()));
    let snapshot2 = capture(&healthy_context(PermissionSet::grant_all()));

    assert_eq!(snapshot1.digest, snapshot2.digest);
}

#[test]
fn test_simulated_context_from_default_config_captures_cleanly() {
    let config = Config::default_config();
    let snapshot = capture(&simulated_context(&config.simulation));

    assert_eq!(snapshot.provider, "gps");
    assert_eq!(
        snapshot.wifi_info,
        "SSID:evidence-net,BSSID:aa:bb:cc:dd:ee:ff"
    );
    assert_eq!(snapshot.cell_info, "cells:4");
    assert!(snapshot.verify_digest());
}
