//! Error types module
//!
//! This module provides the error types used throughout the pixgate
//! application. All errors are unified under the `GatewayError` enum, which
//! covers configuration, validation, upload, and image processing failures.
//!
//! Deletion is intentionally absent from this taxonomy: the delete gateway
//! collapses every failure into `false` (asset cleanup is advisory, not
//! transactional), so it never surfaces a `GatewayError`.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Missing required configuration: {0}")]
    ConfigMissing(String),

    #[error("File size {size_bytes} exceeds {limit_bytes} byte limit")]
    SizeLimitExceeded { size_bytes: u64, limit_bytes: u64 },

    #[error("File must be an image, got: {0}")]
    InvalidFileType(String),

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Image processing error: {0}")]
    ImageProcessing(String),

    #[error("Encoding failed: {0}")]
    EncodeFailed(String),
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::UploadFailed(format!("JSON parsing error: {}", err))
    }
}

impl GatewayError {
    /// Machine-readable error code (e.g., "SIZE_LIMIT_EXCEEDED")
    pub fn error_code(&self) -> &'static str {
        match self {
            GatewayError::ConfigMissing(_) => "CONFIG_MISSING",
            GatewayError::SizeLimitExceeded { .. } => "SIZE_LIMIT_EXCEEDED",
            GatewayError::InvalidFileType(_) => "INVALID_FILE_TYPE",
            GatewayError::UploadFailed(_) => "UPLOAD_FAILED",
            GatewayError::ImageProcessing(_) => "IMAGE_PROCESSING_ERROR",
            GatewayError::EncodeFailed(_) => "ENCODE_FAILED",
        }
    }

    /// Whether this error is recoverable (can be retried)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GatewayError::UploadFailed(_))
    }

    /// Log level for this error
    pub fn log_level(&self) -> LogLevel {
        match self {
            GatewayError::ConfigMissing(_) => LogLevel::Error,
            GatewayError::SizeLimitExceeded { .. } => LogLevel::Debug,
            GatewayError::InvalidFileType(_) => LogLevel::Debug,
            GatewayError::UploadFailed(_) => LogLevel::Error,
            GatewayError::ImageProcessing(_) => LogLevel::Warn,
            GatewayError::EncodeFailed(_) => LogLevel::Warn,
        }
    }
}
