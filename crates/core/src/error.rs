//! Core error types

use thiserror::Error;

/// Core error type for GeoSeal
#[derive(Debug, Error)]
pub enum CoreError {
    /// Generic error
    #[error("Core error: {0}")]
    Generic(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration parse error
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
