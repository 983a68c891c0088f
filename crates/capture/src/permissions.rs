//! Runtime permission model
//!
//! Mirrors the three runtime grants the capturer depends on. A missing
//! grant degrades the corresponding reading to a sentinel instead of
//! failing the capture.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Runtime permission relevant to a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    /// Precise location access
    FineLocation,
    /// Wi-Fi state access
    WifiState,
    /// Telephony state access
    ReadPhoneState,
}

/// Set of granted runtime permissions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionSet {
    granted: HashSet<Permission>,
}

impl PermissionSet {
    /// Create a set with nothing granted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set with every permission granted.
    pub fn grant_all() -> Self {
        let mut set = Self::new();
        set.grant(Permission::FineLocation);
        set.grant(Permission::WifiState);
        set.grant(Permission::ReadPhoneState);
        set
    }

    /// Grant a permission.
    pub fn grant(&mut self, permission: Permission) {
        self.granted.insert(permission);
    }

    /// Check whether a permission is granted.
    pub fn is_granted(&self, permission: Permission) -> bool {
        self.granted.contains(&permission)
    }
}
