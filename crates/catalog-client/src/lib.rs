//! HTTP client for the movie catalog API.
//!
//! This crate provides the outbound side of the aggregator:
//! - `CatalogConfig`: base URL and bearer token, passed in explicitly
//! - `CatalogTransport`: the fetch capability (status + body for a path)
//! - `HttpTransport`: reqwest implementation of that capability
//! - `CatalogClient`: typed `details` / `credits` / `watch_providers` lookups
//!   that map failures onto `catalog::FetchError`
//!
//! No retries, caching or pagination happen here.

pub mod client;
pub mod config;
pub mod http;
pub mod transport;

pub use client::CatalogClient;
pub use config::{BASE_URL_VAR, CatalogConfig, ConfigError, TOKEN_VAR};
pub use http::HttpTransport;
pub use transport::{CatalogTransport, TransportError, TransportResponse};

/// Build a client that talks HTTP to the catalog described by `config`
pub fn connect(config: CatalogConfig) -> Result<CatalogClient<HttpTransport>, TransportError> {
    Ok(CatalogClient::new(HttpTransport::new(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_uses_config() {
        let config = CatalogConfig::new("https://api.themoviedb.org/3", "token").unwrap();
        let client = connect(config).expect("client");
        assert_eq!(client.transport().config().base_url(), "https://api.themoviedb.org/3");
    }
}
