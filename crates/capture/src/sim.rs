//! Deterministic in-process service implementations
//!
//! Software stand-ins for the platform adapters, used by tests and the
//! demo binary.

use geoseal_core::SimulationConfig;

use crate::capturer::current_timestamp;
use crate::context::DeviceContext;
use crate::error::ProviderError;
use crate::permissions::PermissionSet;
use crate::providers::{
    CellService, LocationFix, LocationService, LocationSource, WifiAssociation, WifiService,
};

/// Location service returning a preset fix per provider class.
#[derive(Debug, Clone, Default)]
pub struct SimulatedLocationService {
    pub satellite: Option<LocationFix>,
    pub network: Option<LocationFix>,
}

impl LocationService for SimulatedLocationService {
    fn last_known(&self, source: LocationSource) -> Option<LocationFix> {
        match source {
            LocationSource::Satellite => self.satellite.clone(),
            LocationSource::Network => self.network.clone(),
        }
    }
}

/// Wi-Fi service with a preset association and a fail switch.
#[derive(Debug, Clone, Default)]
pub struct SimulatedWifiService {
    pub enabled: bool,
    pub association: Option<WifiAssociation>,
    pub fail: bool,
}

impl WifiService for SimulatedWifiService {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn association(&self) -> Result<Option<WifiAssociation>, ProviderError> {
        if self.fail {
            return Err(ProviderError::Platform(
                "simulated wifi failure".to_string(),
            ));
        }
        Ok(self.association.clone())
    }
}

/// Telephony service with a preset cell count and a fail switch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedCellService {
    pub count: usize,
    pub fail: bool,
}

impl CellService for SimulatedCellService {
    fn visible_cells(&self) -> Result<usize, ProviderError> {
        if self.fail {
            return Err(ProviderError::Platform(
                "simulated cell failure".to_string(),
            ));
        }
        Ok(self.count)
    }
}

/// Build a fully-granted context seeded from configuration.
///
/// The configured position is exposed through the satellite provider with
/// the current time as its fix time.
pub fn simulated_context(config: &SimulationConfig) -> DeviceContext {
    let fix = LocationFix {
        latitude: config.latitude,
        longitude: config.longitude,
        accuracy: config.accuracy,
        timestamp_ms: current_timestamp(),
        provider: config.provider.clone(),
    };

    let wifi = SimulatedWifiService {
        enabled: config.wifi_enabled,
        association: config.wifi_enabled.then(|| WifiAssociation {
            ssid: config.ssid.clone(),
            bssid: config.bssid.clone(),
        }),
        fail: false,
    };

    let cell = SimulatedCellService {
        count: config.cell_count,
        fail: false,
    };

    DeviceContext::new(
        PermissionSet::grant_all(),
        Box::new(SimulatedLocationService {
            satellite: Some(fix),
            network: None,
        }),
        Box::new(wifi),
        Box::new(cell),
    )
}
