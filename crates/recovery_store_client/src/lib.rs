//! Minimal `RecoveryStore` trait and a reqwest-based implementation for
//! reading the daily recovery table from a hosted REST database.

use async_trait::async_trait;
use thiserror::Error;

pub mod config;
pub mod http_client;

/// One record of daily health metrics, keyed by column name.
///
/// Field order is the order the store returned it in.
pub type Row = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("authentication rejected: {0}")]
    Auth(String),
    #[error("table not found: {0}")]
    NotFound(String),
    #[error("store returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Status code of the failed response, when the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            StoreError::Http(e) => e.status().map(|s| s.as_u16()),
            StoreError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[async_trait]
pub trait RecoveryStore: Send + Sync + 'static {
    /// Fetch every row of `table`, all columns, in the order the store
    /// returns them. An empty table is `Ok(vec![])`.
    async fn fetch_all(&self, table: &str) -> Result<Vec<Row>, StoreError>;
}
