//! Device context handed to the capturer

use crate::permissions::PermissionSet;
use crate::providers::{CellService, LocationService, WifiService};

/// Platform context for one capture: the runtime grants plus read handles
/// to the three device subsystems.
pub struct DeviceContext {
    permissions: PermissionSet,
    location: Box<dyn LocationService>,
    wifi: Box<dyn WifiService>,
    cell: Box<dyn CellService>,
}

impl DeviceContext {
    pub fn new(
        permissions: PermissionSet,
        location: Box<dyn LocationService>,
        wifi: Box<dyn WifiService>,
        cell: Box<dyn CellService>,
    ) -> Self {
        Self {
            permissions,
            location,
            wifi,
            cell,
        }
    }

    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    pub fn location(&self) -> &dyn LocationService {
        self.location.as_ref()
    }

    pub fn wifi(&self) -> &dyn WifiService {
        self.wifi.as_ref()
    }

    pub fn cell(&self) -> &dyn CellService {
        self.cell.as_ref()
    }
}
