//! Delete gateway: signed, best-effort asset removal.
//!
//! Deletion is advisory cleanup, not a transaction: every failure
//! (network, parse, provider refusal) collapses into `false`. Callers
//! that need certainty re-check or re-issue.

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::Context;
use pixgate_core::CdnConfig;
use reqwest::multipart::Form;

use crate::signature::{sign, unix_timestamp};
use crate::types::ProviderDestroyResponse;

const REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct DeleteGateway {
    config: CdnConfig,
    http_client: reqwest::Client,
}

impl DeleteGateway {
    pub fn new(config: CdnConfig) -> Result<Self, anyhow::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client for delete gateway")?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn destroy_endpoint(&self) -> String {
        format!(
            "{}/v1_1/{}/image/destroy",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.cloud_name
        )
    }

    /// Remove an asset by its public id.
    ///
    /// Returns `true` iff the provider confirms removal with
    /// `result: "ok"`. "not found" and every error map to `false`.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, public_id: &str) -> bool {
        match self.try_delete(public_id).await {
            Ok(confirmed) => {
                if !confirmed {
                    tracing::debug!(public_id, "Provider did not confirm removal");
                }
                confirmed
            }
            Err(e) => {
                tracing::warn!(error = %e, public_id, "Failed to delete image");
                false
            }
        }
    }

    /// Delete assets one at a time, accumulating per-item outcomes.
    ///
    /// Sequential on purpose: one failure never aborts the batch, and the
    /// result order matches the input order.
    pub async fn delete_batch(&self, public_ids: &[&str]) -> Vec<(String, bool)> {
        let mut results = Vec::with_capacity(public_ids.len());
        for public_id in public_ids {
            let removed = self.delete(public_id).await;
            results.push((public_id.to_string(), removed));
        }

        let removed = results.iter().filter(|(_, ok)| *ok).count();
        tracing::info!(
            total = results.len(),
            removed,
            failed = results.len() - removed,
            "Batch delete completed"
        );

        results
    }

    async fn try_delete(&self, public_id: &str) -> Result<bool, anyhow::Error> {
        let timestamp = unix_timestamp();

        let mut params = BTreeMap::new();
        params.insert("public_id", public_id.to_string());
        params.insert("timestamp", timestamp.to_string());
        let signature = sign(&params, &self.config.api_secret);

        let form = Form::new()
            .text("public_id", public_id.to_string())
            .text("signature", signature)
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp.to_string());

        let response = self
            .http_client
            .post(self.destroy_endpoint())
            .multipart(form)
            .send()
            .await
            .context("Failed to send destroy request")?;

        let body: ProviderDestroyResponse = response
            .json()
            .await
            .context("Failed to parse destroy response")?;

        Ok(body.result == "ok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Unreachable endpoint: every request errors, exercising the
    // soft-fail path without a provider.
    fn test_gateway() -> DeleteGateway {
        let mut config = CdnConfig::new("demo", "key123", "secret456").unwrap();
        config.api_base_url = "http://127.0.0.1:1".to_string();
        DeleteGateway::new(config).unwrap()
    }

    #[test]
    fn test_destroy_endpoint_shape() {
        let config = CdnConfig::new("demo", "key", "secret").unwrap();
        let gateway = DeleteGateway::new(config).unwrap();
        assert_eq!(
            gateway.destroy_endpoint(),
            "https://api.cloudinary.com/v1_1/demo/image/destroy"
        );
    }

    #[tokio::test]
    async fn test_delete_soft_fails_to_false() {
        let gateway = test_gateway();
        assert!(!gateway.delete("does-not-exist").await);
    }

    #[tokio::test]
    async fn test_delete_batch_survives_failures() {
        let gateway = test_gateway();
        let results = gateway
            .delete_batch(&["blog/post-1/cover", "missing", "projects/x/shot"])
            .await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].0, "blog/post-1/cover");
        assert_eq!(results[1].0, "missing");
        assert_eq!(results[2].0, "projects/x/shot");
        // Endpoint is unreachable, so every item fails, and none aborts
        // the loop.
        assert!(results.iter().all(|(_, removed)| !removed));
    }
}
