//! Error types for the stride_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for stride_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Package structure is wrong (field count, integer or duration syntax)
    #[error("format error: {0}")]
    Format(String),

    /// Package or profile value is out of range
    #[error("validation error: {0}")]
    Validation(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
