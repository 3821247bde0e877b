//! # Movie Aggregator
//!
//! Builds a [`MovieView`] for one movie:
//! 1. Start the details, credits and watch-provider lookups concurrently
//! 2. Wait for all three (fail as soon as any one fails)
//! 3. Assemble the view in a single step
//!
//! The join is all-or-nothing: there is no partially filled view. When one
//! lookup fails the other in-flight lookups are dropped, and dropping the
//! `aggregate` future itself drops all three.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};

use catalog::{DEFAULT_REGION, FetchError, MovieId, MovieView};
use catalog_client::{CatalogClient, CatalogConfig, CatalogTransport, HttpTransport};

/// Fetches and merges catalog resources into movie views
#[derive(Debug, Clone)]
pub struct MovieAggregator<T> {
    client: CatalogClient<T>,
    preferred_region: String,
}

impl MovieAggregator<HttpTransport> {
    /// Create an aggregator that talks HTTP to the catalog in `config`
    pub fn from_config(config: CatalogConfig) -> Result<Self> {
        let client = catalog_client::connect(config).context("Failed to create catalog client")?;
        Ok(Self::with_client(client))
    }
}

impl<T: CatalogTransport> MovieAggregator<T> {
    pub fn new(transport: T) -> Self {
        Self::with_client(CatalogClient::new(transport))
    }

    pub fn with_client(client: CatalogClient<T>) -> Self {
        Self {
            client,
            preferred_region: DEFAULT_REGION.to_string(),
        }
    }

    pub fn client(&self) -> &CatalogClient<T> {
        &self.client
    }

    /// Region whose offers win over the first-listed fallback
    pub fn with_preferred_region(mut self, region: impl Into<String>) -> Self {
        self.preferred_region = region.into();
        self
    }

    pub fn preferred_region(&self) -> &str {
        &self.preferred_region
    }

    /// Fetch details, credits and watch providers for `id` and merge them.
    ///
    /// # Returns
    /// The assembled view, or the first [`FetchError`] any of the three
    /// lookups produced. Nothing is retried.
    pub async fn aggregate(&self, id: &MovieId) -> Result<MovieView, FetchError> {
        let start_time = Instant::now();

        let (details, credits, providers) = tokio::try_join!(
            self.client.details(id),
            self.client.credits(id),
            self.client.watch_providers(id)
        )
        .inspect_err(|e| {
            warn!(
                "Aggregation failed for movie {} ({} on {}): {}",
                id,
                e.kind(),
                e.resource(),
                e
            );
        })?;

        let view = MovieView::assemble(details, credits, providers, &self.preferred_region);

        info!(
            "Aggregated movie {} in {:.2?}: cast={}, director={}, region={}",
            id,
            start_time.elapsed(),
            view.cast().len(),
            view.director().map(|d| d.name.as_str()).unwrap_or("-"),
            view.watch_region().unwrap_or("-")
        );

        Ok(view)
    }
}
