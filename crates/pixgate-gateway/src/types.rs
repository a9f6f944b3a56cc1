//! Request options and provider response mapping.

use serde::{Deserialize, Serialize};

/// Options for a single upload call.
#[derive(Debug, Clone)]
pub struct UploadOptions {
    /// Destination folder on the provider; omitted when empty.
    pub folder: Option<String>,
    /// Ask the provider for automatic quality/format selection.
    pub compression: bool,
    pub max_file_size_mb: u64,
}

impl Default for UploadOptions {
    fn default() -> Self {
        UploadOptions {
            folder: None,
            compression: true,
            max_file_size_mb: 10,
        }
    }
}

impl UploadOptions {
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb * 1024 * 1024
    }
}

/// Stable result shape returned to callers after a successful upload.
///
/// Callers persist `public_id`/`secure_url` themselves; this type has no
/// lifecycle beyond the call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadResult {
    pub public_id: String,
    pub secure_url: String,
    pub width: u32,
    pub height: u32,
    pub bytes: u64,
    pub format: String,
}

/// Provider success body for `image/upload` (provider field names).
#[derive(Debug, Deserialize)]
pub(crate) struct ProviderUploadResponse {
    pub public_id: String,
    pub secure_url: String,
    pub width: u32,
    pub height: u32,
    pub bytes: u64,
    pub format: String,
}

impl From<ProviderUploadResponse> for UploadResult {
    fn from(response: ProviderUploadResponse) -> Self {
        UploadResult {
            public_id: response.public_id,
            secure_url: response.secure_url,
            width: response.width,
            height: response.height,
            bytes: response.bytes,
            format: response.format,
        }
    }
}

/// Provider error body: `{"error": {"message": "..."}}`
#[derive(Debug, Deserialize)]
pub(crate) struct ProviderErrorResponse {
    pub error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProviderErrorBody {
    pub message: String,
}

/// Provider body for `image/destroy`: `{"result": "ok"}` on success.
#[derive(Debug, Deserialize)]
pub(crate) struct ProviderDestroyResponse {
    pub result: String,
}
