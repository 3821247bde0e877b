//! The fetch capability the catalog client is built on.
//!
//! Anything that can perform a `GET` against a catalog path and hand back
//! a status code and body can drive a [`CatalogClient`](crate::CatalogClient):
//! the reqwest-backed [`HttpTransport`](crate::HttpTransport) in production,
//! stubs in tests.

use async_trait::async_trait;
use thiserror::Error;

/// Status and raw body of one catalog response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 200 response carrying `body`
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request did not complete: connection, TLS, timeout, or body read
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

#[async_trait]
pub trait CatalogTransport: Send + Sync {
    /// Perform `GET` on `path`, relative to the catalog base URL
    async fn get(&self, path: &str) -> Result<TransportResponse, TransportError>;
}

#[async_trait]
impl<T> CatalogTransport for std::sync::Arc<T>
where
    T: CatalogTransport + ?Sized,
{
    async fn get(&self, path: &str) -> Result<TransportResponse, TransportError> {
        (**self).get(path).await
    }
}
