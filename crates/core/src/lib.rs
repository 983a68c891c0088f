//! Core functionality for the GeoSeal evidence-capture toolkit.
//!
//! This crate provides the configuration, error, and logging
//! infrastructure shared across the GeoSeal crates.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{Config, LoggingConfig, SimulationConfig};
pub use error::{CoreError, Result};
