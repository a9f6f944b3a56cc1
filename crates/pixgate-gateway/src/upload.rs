//! Upload gateway: validates a candidate file, signs the request, and
//! normalizes the provider's response into [`UploadResult`].

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::Context;
use pixgate_core::{CdnConfig, GatewayError, MediaFile};
use reqwest::multipart::{Form, Part};

use crate::signature::{sign, unix_timestamp};
use crate::types::{ProviderErrorResponse, ProviderUploadResponse, UploadOptions, UploadResult};

const REQUEST_TIMEOUT_SECS: u64 = 60;

pub struct UploadGateway {
    config: CdnConfig,
    http_client: reqwest::Client,
}

impl UploadGateway {
    pub fn new(config: CdnConfig) -> Result<Self, anyhow::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client for upload gateway")?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn upload_endpoint(&self) -> String {
        format!(
            "{}/v1_1/{}/image/upload",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.cloud_name
        )
    }

    /// Upload an image to the provider.
    ///
    /// Size and type are validated before any network attempt, so rejected
    /// files consume no provider quota. One outbound call; no local state
    /// is retained.
    #[tracing::instrument(
        skip(self, file, options),
        fields(filename = %file.filename, size_bytes = file.size_bytes())
    )]
    pub async fn upload(
        &self,
        file: &MediaFile,
        options: &UploadOptions,
    ) -> Result<UploadResult, GatewayError> {
        let limit_bytes = options.max_file_size_bytes();
        if file.size_bytes() > limit_bytes {
            return Err(GatewayError::SizeLimitExceeded {
                size_bytes: file.size_bytes(),
                limit_bytes,
            });
        }

        if !file.is_image() {
            return Err(GatewayError::InvalidFileType(file.content_type.clone()));
        }

        let timestamp = unix_timestamp();
        let folder = options
            .folder
            .as_deref()
            .filter(|folder| !folder.is_empty());

        // The signed set is exactly what the provider re-verifies:
        // timestamp plus folder when present. api_key and file are not
        // part of the signature.
        let mut params = BTreeMap::new();
        params.insert("timestamp", timestamp.to_string());
        if let Some(folder) = folder {
            params.insert("folder", folder.to_string());
        }
        let signature = sign(&params, &self.config.api_secret);

        let file_part = Part::bytes(file.data.to_vec())
            .file_name(file.filename.clone())
            .mime_str(&file.content_type)
            .map_err(|e| GatewayError::InvalidFileType(format!("{}: {}", file.content_type, e)))?;

        let mut form = Form::new()
            .part("file", file_part)
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("signature", signature);

        if let Some(folder) = folder {
            form = form.text("folder", folder.to_string());
        }

        if options.compression {
            form = form.text("quality", "auto").text("fetch_format", "auto");
        }

        let response = self
            .http_client
            .post(self.upload_endpoint())
            .multipart(form)
            .send()
            .await
            .map_err(|e| GatewayError::UploadFailed(format!("request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::UploadFailed(format!("failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(GatewayError::UploadFailed(Self::error_message(
                status, &body,
            )));
        }

        // serde_json::Error converts to UploadFailed via From.
        let parsed: ProviderUploadResponse = serde_json::from_str(&body)?;

        let result = UploadResult::from(parsed);
        tracing::info!(
            public_id = %result.public_id,
            width = result.width,
            height = result.height,
            bytes = result.bytes,
            "Image uploaded"
        );

        Ok(result)
    }

    /// Best error message available: the provider's structured message,
    /// then the raw body, then the HTTP status text.
    fn error_message(status: reqwest::StatusCode, body: &str) -> String {
        if let Ok(parsed) = serde_json::from_str::<ProviderErrorResponse>(body) {
            return parsed.error.message;
        }
        if !body.trim().is_empty() {
            return body.trim().to_string();
        }
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Unroutable endpoint: a request reaching the network would fail with
    // a connection error, so validation outcomes prove no call was made.
    fn test_gateway() -> UploadGateway {
        let mut config = CdnConfig::new("demo", "key123", "secret456").unwrap();
        config.api_base_url = "http://127.0.0.1:1".to_string();
        UploadGateway::new(config).unwrap()
    }

    fn image_file(size: usize) -> MediaFile {
        MediaFile::new("photo.jpg", "image/jpeg", vec![0u8; size])
    }

    #[test]
    fn test_upload_endpoint_shape() {
        let config = CdnConfig::new("demo", "key", "secret").unwrap();
        let gateway = UploadGateway::new(config).unwrap();
        assert_eq!(
            gateway.upload_endpoint(),
            "https://api.cloudinary.com/v1_1/demo/image/upload"
        );
    }

    #[tokio::test]
    async fn test_upload_rejects_oversized_file_before_network() {
        let gateway = test_gateway();
        let file = image_file(15 * 1024 * 1024);
        let options = UploadOptions::default(); // 10 MB limit

        let err = gateway.upload(&file, &options).await.unwrap_err();
        assert_eq!(err.error_code(), "SIZE_LIMIT_EXCEEDED");
    }

    #[tokio::test]
    async fn test_upload_rejects_non_image_before_network() {
        let gateway = test_gateway();
        let file = MediaFile::new("notes.txt", "text/plain", vec![0u8; 64]);

        let err = gateway
            .upload(&file, &UploadOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_FILE_TYPE");
        assert!(err.to_string().contains("text/plain"));
    }

    #[tokio::test]
    async fn test_upload_respects_custom_limit() {
        let gateway = test_gateway();
        let file = image_file(3 * 1024 * 1024);
        let options = UploadOptions {
            max_file_size_mb: 2,
            ..Default::default()
        };

        let err = gateway.upload(&file, &options).await.unwrap_err();
        assert!(matches!(
            err,
            GatewayError::SizeLimitExceeded {
                limit_bytes: 2_097_152,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_upload_network_failure_is_upload_failed() {
        let gateway = test_gateway();
        let file = image_file(1024);

        let err = gateway
            .upload(&file, &UploadOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "UPLOAD_FAILED");
    }

    #[test]
    fn test_error_message_fallback_chain() {
        let status = reqwest::StatusCode::BAD_REQUEST;

        let structured = r#"{"error": {"message": "Invalid Signature"}}"#;
        assert_eq!(
            UploadGateway::error_message(status, structured),
            "Invalid Signature"
        );

        assert_eq!(
            UploadGateway::error_message(status, "plain text failure"),
            "plain text failure"
        );

        assert_eq!(UploadGateway::error_message(status, "  "), "Bad Request");
    }
}
