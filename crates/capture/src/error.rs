//! Capture errors

use thiserror::Error;

/// Error returned by platform service adapters.
///
/// The capturer absorbs every variant into a sentinel reading; nothing
/// here ever reaches a caller of `capture`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Service missing or not ready on this platform
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// Platform call failed
    #[error("Platform error: {0}")]
    Platform(String),
}
