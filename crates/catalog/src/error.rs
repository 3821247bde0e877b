//! Error types for the catalog crate.
//!
//! `FetchError` is what a single catalog lookup (and therefore a whole
//! aggregation) fails with. Every variant remembers which of the three
//! resources it came from, so callers can either collapse it into a plain
//! "aggregation failed" outcome or report exactly what broke.

use std::fmt;

use thiserror::Error;

use crate::resource::Resource;

/// Errors that can occur while fetching one catalog resource
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never reached the catalog, or no response came back
    #[error("Transport failure while fetching {resource}: {message}")]
    Transport { resource: Resource, message: String },

    /// The catalog answered with a non-success status
    #[error("Catalog returned HTTP {status} for {resource}")]
    Http { resource: Resource, status: u16 },

    /// The response body did not match the expected shape
    #[error("Failed to decode {resource}: {message}")]
    Decode { resource: Resource, message: String },
}

/// Coarse classification of a [`FetchError`], without the provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    TransportFailure,
    HttpFailure,
    DecodeFailure,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FailureKind::TransportFailure => "transport failure",
            FailureKind::HttpFailure => "http failure",
            FailureKind::DecodeFailure => "decode failure",
        };
        f.write_str(label)
    }
}

impl FetchError {
    /// Which sub-fetch produced this error
    pub fn resource(&self) -> Resource {
        match self {
            FetchError::Transport { resource, .. }
            | FetchError::Http { resource, .. }
            | FetchError::Decode { resource, .. } => *resource,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Transport { .. } => FailureKind::TransportFailure,
            FetchError::Http { .. } => FailureKind::HttpFailure,
            FetchError::Decode { .. } => FailureKind::DecodeFailure,
        }
    }
}

/// Errors raised while building catalog values from caller input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Movie identifiers must contain at least one non-whitespace character
    #[error("Movie identifier must not be empty")]
    EmptyIdentifier,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
