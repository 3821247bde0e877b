//! Typed lookups for the three per-movie catalog resources.

use catalog::{FetchError, MovieId, RawCredits, RawDetails, RawWatchProviders, Resource};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::transport::CatalogTransport;

/// Turns transport responses into decoded catalog records.
///
/// Each lookup maps its own failures onto [`FetchError`] tagged with the
/// resource it was fetching.
#[derive(Debug, Clone)]
pub struct CatalogClient<T> {
    transport: T,
}

impl<T: CatalogTransport> CatalogClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /movie/{id}`
    pub async fn details(&self, id: &MovieId) -> Result<RawDetails, FetchError> {
        self.fetch(Resource::Details, id).await
    }

    /// `GET /movie/{id}/credits`
    pub async fn credits(&self, id: &MovieId) -> Result<RawCredits, FetchError> {
        self.fetch(Resource::Credits, id).await
    }

    /// `GET /movie/{id}/watch/providers`
    pub async fn watch_providers(&self, id: &MovieId) -> Result<RawWatchProviders, FetchError> {
        self.fetch(Resource::WatchProviders, id).await
    }

    async fn fetch<R: DeserializeOwned>(
        &self,
        resource: Resource,
        id: &MovieId,
    ) -> Result<R, FetchError> {
        let path = resource.path(id);
        debug!("Fetching {} for movie {}", resource, id);

        let response = self.transport.get(&path).await.map_err(|e| {
            warn!("Transport failure fetching {} for movie {}: {}", resource, id, e);
            FetchError::Transport {
                resource,
                message: e.to_string(),
            }
        })?;

        if !response.is_success() {
            warn!(
                "Catalog returned {} fetching {} for movie {}",
                response.status, resource, id
            );
            return Err(FetchError::Http {
                resource,
                status: response.status,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| {
            warn!("Failed to decode {} for movie {}: {}", resource, id, e);
            FetchError::Decode {
                resource,
                message: e.to_string(),
            }
        })
    }
}
