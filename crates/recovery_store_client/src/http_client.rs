//! HTTP client for a PostgREST-style table endpoint.
//!
//! This module provides a reqwest-based implementation of the
//! [`RecoveryStore`](crate::RecoveryStore) trait.

use crate::{RecoveryStore, Row, StoreError};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Error payload returned by the REST layer on failed queries.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Client for the hosted store's REST interface using reqwest.
#[derive(Clone, Debug)]
pub struct ReqwestRecoveryStore {
    base_url: String,
    api_key: SecretString,
    client: reqwest::Client,
}

impl ReqwestRecoveryStore {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `base_url` - Project URL of the hosted store (e.g., "https://xyz.supabase.co")
    /// * `api_key` - Key sent both as `apikey` and as the bearer token
    pub fn new(base_url: &str, api_key: SecretString) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
        })
    }

    pub fn from_config(cfg: &crate::config::Config) -> Result<Self, StoreError> {
        Self::new(&cfg.base_url, cfg.api_key.clone())
    }

    /// Build an authenticated GET request.
    fn get_request(&self, url: &str) -> reqwest::RequestBuilder {
        let key = self.api_key.expose_secret();
        self.client
            .get(url)
            .header("apikey", key)
            .bearer_auth(key)
            .header(reqwest::header::ACCEPT, "application/json")
    }

    /// Extract error information from a failed response.
    async fn error_from_response(&self, resp: reqwest::Response) -> StoreError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or(body);
        let snippet: String = message.chars().take(256).collect();

        match status {
            401 | 403 => StoreError::Auth(snippet),
            404 => StoreError::NotFound(snippet),
            _ => StoreError::Api {
                status,
                message: snippet,
            },
        }
    }
}

#[async_trait]
impl RecoveryStore for ReqwestRecoveryStore {
    async fn fetch_all(&self, table: &str) -> Result<Vec<Row>, StoreError> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        tracing::debug!(url = %url, "fetching all rows");
        let resp = self
            .get_request(&url)
            .query(&[("select", "*")])
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(self.error_from_response(resp).await);
        }
        let body = resp.text().await?;
        serde_json::from_str::<Vec<Row>>(&body).map_err(|e| StoreError::Decode(e.to_string()))
    }
}
