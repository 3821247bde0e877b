//! reqwest implementation of [`CatalogTransport`].

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use tracing::{debug, error};

use crate::config::CatalogConfig;
use crate::transport::{CatalogTransport, TransportError, TransportResponse};

/// Sends bearer-authenticated JSON requests to the catalog.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: CatalogConfig,
}

impl HttpTransport {
    pub fn new(config: CatalogConfig) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}

#[async_trait]
impl CatalogTransport for HttpTransport {
    async fn get(&self, path: &str) -> Result<TransportResponse, TransportError> {
        let url = self.config.url_for(path);
        debug!(url = %url, "Catalog request");

        let response = self
            .client
            .get(&url)
            .bearer_auth(self.config.token())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                error!("Request to {} failed: {}", url, e);
                TransportError(e.to_string())
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(format!("Failed to read response body: {e}")))?;

        Ok(TransportResponse { status, body })
    }
}
