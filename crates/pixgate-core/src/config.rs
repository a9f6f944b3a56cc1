//! Configuration module
//!
//! Provides the CDN credential set and endpoint configuration, read once
//! from the process environment at startup. Credentials are passed into
//! gateway constructors explicitly; there is no ambient/global lookup.

use std::env;

use crate::error::GatewayError;

const DEFAULT_API_BASE_URL: &str = "https://api.cloudinary.com";
const DEFAULT_CDN_BASE_URL: &str = "https://res.cloudinary.com";
const DEFAULT_MAX_FILE_SIZE_MB: u64 = 10;

/// CDN credential set and endpoints.
///
/// Immutable for the process lifetime. The secret key must never be logged
/// or returned to callers; it only feeds the request signer.
#[derive(Clone)]
pub struct CdnConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// API endpoint base, overridable for testing against a local stub.
    pub api_base_url: String,
    /// Delivery (display URL) base.
    pub cdn_base_url: String,
    pub max_file_size_mb: u64,
}

// Manual Debug to keep the secret out of logs and panic messages.
impl std::fmt::Debug for CdnConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CdnConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"***")
            .field("api_base_url", &self.api_base_url)
            .field("cdn_base_url", &self.cdn_base_url)
            .field("max_file_size_mb", &self.max_file_size_mb)
            .finish()
    }
}

impl CdnConfig {
    /// Build a config from explicit values, rejecting empty credentials.
    ///
    /// This is the injection point for tests: fake credentials go through
    /// the same validation as real ones.
    pub fn new(
        cloud_name: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self, GatewayError> {
        let config = CdnConfig {
            cloud_name: cloud_name.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            cdn_base_url: DEFAULT_CDN_BASE_URL.to_string(),
            max_file_size_mb: DEFAULT_MAX_FILE_SIZE_MB,
        };
        config.check_credentials()?;
        Ok(config)
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let config = CdnConfig {
            cloud_name: env::var("PIXGATE_CLOUD_NAME")
                .map_err(|_| anyhow::anyhow!("PIXGATE_CLOUD_NAME must be set"))?,
            api_key: env::var("PIXGATE_API_KEY")
                .map_err(|_| anyhow::anyhow!("PIXGATE_API_KEY must be set"))?,
            api_secret: env::var("PIXGATE_API_SECRET")
                .map_err(|_| anyhow::anyhow!("PIXGATE_API_SECRET must be set"))?,
            api_base_url: env::var("PIXGATE_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            cdn_base_url: env::var("PIXGATE_CDN_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_CDN_BASE_URL.to_string()),
            max_file_size_mb: env::var("MAX_FILE_SIZE_MB")
                .unwrap_or_else(|_| DEFAULT_MAX_FILE_SIZE_MB.to_string())
                .parse::<u64>()
                .unwrap_or(DEFAULT_MAX_FILE_SIZE_MB),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.check_credentials()?;

        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err(anyhow::anyhow!(
                "PIXGATE_API_BASE_URL must be an http(s) URL"
            ));
        }

        if self.max_file_size_mb == 0 {
            return Err(anyhow::anyhow!("MAX_FILE_SIZE_MB must be greater than 0"));
        }

        Ok(())
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb * 1024 * 1024
    }

    fn check_credentials(&self) -> Result<(), GatewayError> {
        for (name, value) in [
            ("PIXGATE_CLOUD_NAME", &self.cloud_name),
            ("PIXGATE_API_KEY", &self.api_key),
            ("PIXGATE_API_SECRET", &self.api_secret),
        ] {
            if value.trim().is_empty() {
                return Err(GatewayError::ConfigMissing(name.to_string()));
            }
        }
        Ok(())
    }
}
