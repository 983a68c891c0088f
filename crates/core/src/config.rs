//! Configuration management for GeoSeal.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub logging: LoggingConfig,
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Emit JSON log lines instead of human-readable ones
    pub json: bool,
}

/// Seed values for the simulated platform services used by tests and the
/// demo binary. Real deployments replace the simulated services with
/// platform adapters and ignore this section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: f64,
    pub provider: String,
    pub wifi_enabled: bool,
    pub ssid: String,
    pub bssid: String,
    pub cell_count: usize,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            logging: LoggingConfig { json: false },
            simulation: SimulationConfig {
                latitude: 34.052235,
                longitude: -118.243683,
                accuracy: 12.5,
                provider: "gps".to_string(),
                wifi_enabled: true,
                ssid: "evidence-net".to_string(),
                bssid: "aa:bb:cc:dd:ee:ff".to_string(),
                cell_count: 4,
            },
        }
    }
}
