//! JSONBin Client
//!
//! HTTP implementation of [`DocumentClient`] against a JSONBin v3 style
//! endpoint: GET `{api}/{id}/latest`, PUT `{api}/{id}`.

use async_trait::async_trait;
use serde::Deserialize;

use super::traits::DocumentClient;
use crate::config::RemoteConfig;
use crate::domain::Document;
use crate::error::{StoreError, StoreResult};

const ACCESS_KEY_HEADER: &str = "X-Access-Key";
const MASTER_KEY_HEADER: &str = "X-Master-Key";

/// Read responses wrap the document in metadata
#[derive(Deserialize)]
struct LatestEnvelope {
    record: Document,
}

pub struct JsonBinClient {
    config: RemoteConfig,
    http: reqwest::Client,
}

impl JsonBinClient {
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl DocumentClient for JsonBinClient {
    async fn load(&self) -> StoreResult<Document> {
        let url = self.config.latest_url();
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(ACCESS_KEY_HEADER, &self.config.access_key)
            .send()
            .await
            .map_err(|e| StoreError::LoadFailure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::LoadFailure(format!("status {}", status)));
        }

        let envelope: LatestEnvelope = response
            .json()
            .await
            .map_err(|e| StoreError::LoadFailure(format!("invalid document: {}", e)))?;
        Ok(envelope.record)
    }

    async fn save(&self, document: &Document) -> StoreResult<()> {
        let url = self.config.document_url();
        log::debug!("PUT {}", url);

        let mut body = document.clone();
        body.version = document.effective_version();

        let response = self
            .http
            .put(&url)
            .header(MASTER_KEY_HEADER, &self.config.master_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| StoreError::SaveFailure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::SaveFailure(format!("status {}", status)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_envelope() {
        let json = r#"{
            "record": {"reflections": [], "customLink": "", "lastUpdated": "2024-05-01T10:00:00.000Z", "version": 1},
            "metadata": {"id": "683428ea8561e97a501b9c77", "private": true}
        }"#;
        let envelope: LatestEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.record.version, 1);
        assert!(envelope.record.reflections.is_empty());
    }

    #[test]
    fn test_client_keeps_config() {
        let client = JsonBinClient::new(RemoteConfig::from_build_env());
        assert!(client.config().document_url().ends_with(&client.config().document_id));
    }
}
