//! Product sources.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::FetchConfig;

use super::error::FetchError;
use super::product::Product;

/// Something that can produce the full product list.
///
/// The fetch orchestration only depends on this trait, so tests and
/// alternative transports can stand in for HTTP.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Where products are fetched from, for logging.
    fn endpoint(&self) -> &str;

    /// Fetch the complete product list once.
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;
}

/// Fetches products with a single `GET` against a fixed endpoint.
pub struct HttpProductSource {
    client: Client,
    endpoint: String,
}

impl HttpProductSource {
    /// Build a source with the given connect timeout.
    ///
    /// No total request timeout is set; a slow server keeps the fetch
    /// pending for as long as the transport allows.
    pub fn new(endpoint: impl Into<String>, connect_timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &FetchConfig) -> Result<Self, FetchError> {
        Self::new(
            config.endpoint.clone(),
            Duration::from_secs(config.connect_timeout_seconds),
        )
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let response = self
            .client
            .get(self.endpoint.as_str())
            .send()
            .await
            .map_err(|e| FetchError::Network {
                endpoint: self.endpoint.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Network {
            endpoint: self.endpoint.clone(),
            source: e,
        })?;

        let products: Vec<Product> = serde_json::from_slice(&body)?;
        tracing::debug!(
            endpoint = %self.endpoint,
            count = products.len(),
            "Decoded product list"
        );
        Ok(products)
    }
}
