//! Error types for the device status service

use device_model::StoreError;

/// Errors that can occur in the device status service
#[derive(Debug, thiserror::Error)]
pub enum DeviceStatusError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Device store error: {0}")]
    Store(#[from] StoreError),

    #[error("Device source error: {0}")]
    Source(String),
}

/// Result type alias for device status operations
pub type Result<T> = std::result::Result<T, DeviceStatusError>;
